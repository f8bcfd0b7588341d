//! Join Competition Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Competition, Enrollment};
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId};

/// Join competition use case
pub struct JoinCompetitionUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    competition_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> JoinCompetitionUseCase<C, E>
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

    pub async fn execute(
        &self,
        account_id: Uuid,
        competition_id: Uuid,
    ) -> ContestResult<Competition> {
        let competition_id = CompetitionId::from_uuid(competition_id);

        let competition = self
            .competition_repo
            .find_by_id(&competition_id)
            .await?
            .ok_or(ContestError::CompetitionNotFound)?;

        // No pre-check: the unique constraint on (account, competition) is
        // the single source of truth, so concurrent double-joins cannot
        // slip through. A duplicate insert surfaces as AlreadyEnrolled.
        let enrollment = Enrollment::new(AccountId::from_uuid(account_id), competition_id);
        self.enrollment_repo.create(&enrollment).await?;

        tracing::info!(
            account_id = %enrollment.account_id,
            competition_id = %competition_id,
            "Account joined competition"
        );

        Ok(competition)
    }
}
