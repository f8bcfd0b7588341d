//! Contest Backend Module
//!
//! Competitions, enrollments, project submissions, and winner selection.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, status machine, upload validation, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! An `Enrollment` ties one account to one competition and carries both the
//! membership status (`joined` / `participant` / `winner`) and the optional
//! submitted project (file bytes live inline in the row). Uniqueness of
//! (account, competition) is a database constraint, not a pre-check.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ContestConfig;
pub use error::{ContestError, ContestResult};
pub use infra::postgres::PgContestRepository;
pub use presentation::router::{contest_router, contest_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
