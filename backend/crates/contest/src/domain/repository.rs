//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Competition, Enrollment};
use crate::error::ContestResult;
use kernel::id::{AccountId, CompetitionId, EnrollmentId};
use uuid::Uuid;

/// Competition repository trait
#[trait_variant::make(CompetitionRepository: Send)]
pub trait LocalCompetitionRepository {
    /// Persist a new competition
    async fn create(&self, competition: &Competition) -> ContestResult<()>;

    /// Find competition by ID
    async fn find_by_id(&self, competition_id: &CompetitionId)
    -> ContestResult<Option<Competition>>;

    /// All competitions (no pagination, no filtering)
    async fn list_all(&self) -> ContestResult<Vec<Competition>>;

    /// Competitions the account has enrolled in
    async fn list_joined_by(&self, account_id: &AccountId) -> ContestResult<Vec<Competition>>;
}

/// Enrollment repository trait
#[trait_variant::make(EnrollmentRepository: Send)]
pub trait LocalEnrollmentRepository {
    /// Persist a new enrollment
    ///
    /// The (account, competition) pair is unique at the storage layer;
    /// a duplicate insert must fail with `ContestError::AlreadyEnrolled`.
    async fn create(&self, enrollment: &Enrollment) -> ContestResult<()>;

    /// Find enrollment by ID
    async fn find_by_id(&self, enrollment_id: &EnrollmentId) -> ContestResult<Option<Enrollment>>;

    /// Find the enrollment of an account in a competition
    async fn find_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<Option<Enrollment>>;

    /// All enrollments for a competition (submitted or not)
    async fn list_by_competition(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Vec<Enrollment>>;

    /// Enrollments with status `winner` for a competition
    async fn list_winners(&self, competition_id: &CompetitionId)
    -> ContestResult<Vec<Enrollment>>;

    /// Overwrite the submission fields of an enrollment
    async fn update_submission(&self, enrollment: &Enrollment) -> ContestResult<()>;

    /// Delete the enrollment of an account in a competition
    ///
    /// Returns `false` when there was nothing to delete.
    async fn delete_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<bool>;

    /// Recompute the status of every enrollment in a competition
    ///
    /// Accounts in `winner_account_ids` become `winner`, everyone else
    /// `participant` - a destructive full replace, in one atomic statement.
    /// Returns the number of affected enrollments.
    async fn replace_winners(
        &self,
        competition_id: &CompetitionId,
        winner_account_ids: &[Uuid],
    ) -> ContestResult<u64>;
}
