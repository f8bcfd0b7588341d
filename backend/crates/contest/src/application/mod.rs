//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_competition;
pub mod dashboard;
pub mod download_submission;
pub mod get_competition;
pub mod join_competition;
pub mod leave_competition;
pub mod list_competitions;
pub mod list_submissions;
pub mod list_winners;
pub mod submit_project;
pub mod submit_winners;

// Re-exports
pub use config::ContestConfig;
pub use create_competition::{CreateCompetitionInput, CreateCompetitionUseCase};
pub use dashboard::{DashboardOutput, DashboardUseCase};
pub use download_submission::{DownloadSubmissionOutput, DownloadSubmissionUseCase};
pub use get_competition::GetCompetitionUseCase;
pub use join_competition::JoinCompetitionUseCase;
pub use leave_competition::{LeaveCompetitionOutput, LeaveCompetitionUseCase};
pub use list_competitions::ListCompetitionsUseCase;
pub use list_submissions::ListSubmissionsUseCase;
pub use list_winners::ListWinnersUseCase;
pub use submit_project::{SubmitProjectInput, SubmitProjectUseCase};
pub use submit_winners::{SubmitWinnersInput, SubmitWinnersUseCase};
