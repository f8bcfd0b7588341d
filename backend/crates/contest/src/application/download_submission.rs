//! Download Submission Use Case
//!
//! Returns the stored file bytes of a submission, creator-only.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, EnrollmentId};

/// Download submission output
#[derive(Debug)]
pub struct DownloadSubmissionOutput {
    pub file_name: String,
    pub mimetype: String,
    pub data: Vec<u8>,
}

/// Download submission use case
pub struct DownloadSubmissionUseCase<C, E>
where
    C: CompetitionRepository,
    E: EnrollmentRepository,
{
    competition_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> DownloadSubmissionUseCase<C, E>
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
        enrollment_id: Uuid,
    ) -> ContestResult<DownloadSubmissionOutput> {
        let enrollment = self
            .enrollment_repo
            .find_by_id(&EnrollmentId::from_uuid(enrollment_id))
            .await?
            .ok_or(ContestError::EnrollmentNotFound)?;

        let competition = self
            .competition_repo
            .find_by_id(&enrollment.competition_id)
            .await?
            .ok_or(ContestError::CompetitionNotFound)?;

        // The permission check comes before the has-file check so a
        // non-creator learns nothing about the submission either way.
        if !competition.is_created_by(&AccountId::from_uuid(requester_id)) {
            return Err(ContestError::Forbidden);
        }

        let data = enrollment
            .project_file_data
            .ok_or(ContestError::NoSubmission)?;

        Ok(DownloadSubmissionOutput {
            file_name: enrollment
                .project_file_name
                .unwrap_or_else(|| "download".to_string()),
            mimetype: enrollment
                .project_file_mimetype
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            data,
        })
    }
}
