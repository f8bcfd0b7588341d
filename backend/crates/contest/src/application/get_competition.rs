//! Get Competition Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Competition;
use crate::domain::repository::CompetitionRepository;
use crate::error::{ContestError, ContestResult};
use kernel::id::CompetitionId;

/// Get competition use case
pub struct GetCompetitionUseCase<C>
where
    C: CompetitionRepository,
{
    competition_repo: Arc<C>,
}

impl<C> GetCompetitionUseCase<C>
where
    C: CompetitionRepository,
{
    pub fn new(competition_repo: Arc<C>) -> Self {
        Self { competition_repo }
    }

    pub async fn execute(&self, competition_id: Uuid) -> ContestResult<Competition> {
        self.competition_repo
            .find_by_id(&CompetitionId::from_uuid(competition_id))
            .await?
            .ok_or(ContestError::CompetitionNotFound)
    }
}
