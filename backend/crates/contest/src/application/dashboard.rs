//! Dashboard Use Case
//!
//! The caller's joined competitions alongside the full listing.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Competition;
use crate::domain::repository::CompetitionRepository;
use crate::error::ContestResult;
use kernel::id::AccountId;

/// Dashboard output
pub struct DashboardOutput {
    /// Competitions the account has enrolled in
    pub joined: Vec<Competition>,
    /// Every competition
    pub all: Vec<Competition>,
}

/// Dashboard use case
pub struct DashboardUseCase<C>
where
    C: CompetitionRepository,
{
    competition_repo: Arc<C>,
}

impl<C> DashboardUseCase<C>
where
    C: CompetitionRepository,
{
    pub fn new(competition_repo: Arc<C>) -> Self {
        Self { competition_repo }
    }

    pub async fn execute(&self, account_id: Uuid) -> ContestResult<DashboardOutput> {
        let account_id = AccountId::from_uuid(account_id);

        let joined = self.competition_repo.list_joined_by(&account_id).await?;
        let all = self.competition_repo.list_all().await?;

        Ok(DashboardOutput { joined, all })
    }
}
