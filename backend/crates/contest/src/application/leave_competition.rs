//! Leave Competition Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::EnrollmentRepository;
use crate::error::ContestResult;
use kernel::id::{AccountId, CompetitionId};

/// Leave competition output
pub struct LeaveCompetitionOutput {
    /// False when the account was not enrolled (a no-op, not an error)
    pub left: bool,
}

/// Leave competition use case
pub struct LeaveCompetitionUseCase<E>
where
    E: EnrollmentRepository,
{
    enrollment_repo: Arc<E>,
}

impl<E> LeaveCompetitionUseCase<E>
where
    E: EnrollmentRepository,
{
    pub fn new(enrollment_repo: Arc<E>) -> Self {
        Self { enrollment_repo }
    }

    pub async fn execute(
        &self,
        account_id: Uuid,
        competition_id: Uuid,
    ) -> ContestResult<LeaveCompetitionOutput> {
        let left = self
            .enrollment_repo
            .delete_by_account_and_competition(
                &AccountId::from_uuid(account_id),
                &CompetitionId::from_uuid(competition_id),
            )
            .await?;

        if left {
            tracing::info!(
                account_id = %account_id,
                competition_id = %competition_id,
                "Account left competition"
            );
        }

        Ok(LeaveCompetitionOutput { left })
    }
}
