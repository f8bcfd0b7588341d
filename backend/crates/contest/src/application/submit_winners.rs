//! Submit Winners Use Case
//!
//! Recomputes the status of every enrollment in a competition from the
//! given winner set. Full replace: previous winners not in the new set
//! are demoted to participant.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId};

/// Submit winners input
pub struct SubmitWinnersInput {
    pub requester_id: Uuid,
    pub competition_id: Uuid,
    pub winner_account_ids: Vec<Uuid>,
}

/// Submit winners use case
pub struct SubmitWinnersUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    competition_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> SubmitWinnersUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    pub fn new(competition_repo: Arc<C>, enrollment_repo: Arc<E>) -> Self {
        Self {
            competition_repo,
            enrollment_repo,
        }
    }

    pub async fn execute(&self, input: SubmitWinnersInput) -> ContestResult<u64> {
        let competition_id = CompetitionId::from_uuid(input.competition_id);

        let competition = self
            .competition_repo
            .find_by_id(&competition_id)
            .await?
            .ok_or(ContestError::CompetitionNotFound)?;

        if !competition.is_created_by(&AccountId::from_uuid(input.requester_id)) {
            return Err(ContestError::Forbidden);
        }

        if input.winner_account_ids.is_empty() {
            return Err(ContestError::Validation(
                "Please select at least one winner".to_string(),
            ));
        }

        let updated = self
            .enrollment_repo
            .replace_winners(&competition_id, &input.winner_account_ids)
            .await?;

        tracing::info!(
            competition_id = %competition_id,
            winners = input.winner_account_ids.len(),
            updated = updated,
            "Winners submitted"
        );

        Ok(updated)
    }
}
