//! List Submissions Use Case
//!
//! Creator-only view of every enrollment in a competition.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Enrollment;
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId};

/// List submissions use case
pub struct ListSubmissionsUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    competition_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> ListSubmissionsUseCase<C, E>
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
        requester_id: Uuid,
        competition_id: Uuid,
    ) -> ContestResult<Vec<Enrollment>> {
        let competition_id = CompetitionId::from_uuid(competition_id);

        let competition = self
            .competition_repo
            .find_by_id(&competition_id)
            .await?
            .ok_or(ContestError::CompetitionNotFound)?;

        if !competition.is_created_by(&AccountId::from_uuid(requester_id)) {
            return Err(ContestError::Forbidden);
        }

        // Includes enrollments without a submitted file
        self.enrollment_repo.list_by_competition(&competition_id).await
    }
}
