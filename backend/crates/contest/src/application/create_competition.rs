//! Create Competition Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::Competition;
use crate::domain::repository::CompetitionRepository;
use crate::domain::value_objects::EntryFee;
use crate::error::{ContestError, ContestResult};
use kernel::id::AccountId;

/// Create competition input
pub struct CreateCompetitionInput {
    pub creator_id: Uuid,
    pub name: String,
    pub description: String,
    pub details: String,
    /// Free text from the form; must parse to a finite, non-negative float
    pub fee: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub prizes: Option<String>,
}

/// Create competition use case
pub struct CreateCompetitionUseCase<C>
where
    C: CompetitionRepository,
{
    competition_repo: Arc<C>,
}

impl<C> CreateCompetitionUseCase<C>
where
    C: CompetitionRepository,
{
    pub fn new(competition_repo: Arc<C>) -> Self {
        Self { competition_repo }
    }

    pub async fn execute(&self, input: CreateCompetitionInput) -> ContestResult<Competition> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ContestError::Validation(
                "Competition name is required".to_string(),
            ));
        }

        let location = input.location.trim().to_string();
        if location.is_empty() {
            return Err(ContestError::Validation(
                "Competition location is required".to_string(),
            ));
        }

        let fee =
            EntryFee::parse(&input.fee).map_err(|e| ContestError::Validation(e.to_string()))?;

        let prizes = input
            .prizes
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let competition = Competition::new(
            AccountId::from_uuid(input.creator_id),
            name,
            input.description,
            input.details,
            fee,
            input.event_date,
            location,
            prizes,
        );

        self.competition_repo.create(&competition).await?;

        tracing::info!(
            competition_id = %competition.competition_id,
            creator_id = %competition.creator_id,
            "Competition created"
        );

        Ok(competition)
    }
}
