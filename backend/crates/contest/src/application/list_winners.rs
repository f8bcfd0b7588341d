//! List Winners Use Case
//!
//! Visible to the creator; optionally (by configuration) to enrolled
//! participants as well.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::ContestConfig;
use crate::domain::entities::Enrollment;
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId};

/// List winners use case
pub struct ListWinnersUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    competition_repo: Arc<C>,
    enrollment_repo: Arc<E>,
    config: Arc<ContestConfig>,
}

impl<C, E> ListWinnersUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    pub fn new(competition_repo: Arc<C>, enrollment_repo: Arc<E>, config: Arc<ContestConfig>) -> Self {
        Self {
            competition_repo,
            enrollment_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        requester_id: Uuid,
        competition_id: Uuid,
    ) -> ContestResult<Vec<Enrollment>> {
        let competition_id = CompetitionId::from_uuid(competition_id);
        let requester = AccountId::from_uuid(requester_id);

        let competition = self
            .competition_repo
            .find_by_id(&competition_id)
            .await?
            .ok_or(ContestError::CompetitionNotFound)?;

        let mut allowed = competition.is_created_by(&requester);

        if !allowed && self.config.winners_visible_to_participants {
            allowed = self
                .enrollment_repo
                .find_by_account_and_competition(&requester, &competition_id)
                .await?
                .is_some();
        }

        if !allowed {
            return Err(ContestError::Forbidden);
        }

        self.enrollment_repo.list_winners(&competition_id).await
    }
}
