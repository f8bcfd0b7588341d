//! List Competitions Use Case
//!
//! Flat full-table read; there is deliberately no pagination or filtering.

use std::sync::Arc;

use crate::domain::entities::Competition;
use crate::domain::repository::CompetitionRepository;
use crate::error::ContestResult;

/// List competitions use case
pub struct ListCompetitionsUseCase<C>
where
    C: CompetitionRepository,
{
    competition_repo: Arc<C>,
}

impl<C> ListCompetitionsUseCase<C>
where
    C: CompetitionRepository,
{
    pub fn new(competition_repo: Arc<C>) -> Self {
        Self { competition_repo }
    }

    pub async fn execute(&self) -> ContestResult<Vec<Competition>> {
        self.competition_repo.list_all().await
    }
}
