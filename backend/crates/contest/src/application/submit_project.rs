//! Submit Project Use Case
//!
//! Attaches (or replaces) the project on an existing enrollment.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::ContestConfig;
use crate::domain::repository::EnrollmentRepository;
use crate::domain::services::{
    content_matches_extension, extension_allowed, file_extension, sanitize_filename,
};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId};

/// Submit project input
pub struct SubmitProjectInput {
    pub account_id: Uuid,
    pub competition_id: Uuid,
    pub description: String,
    /// Original filename as sent by the client
    pub file_name: String,
    pub file_data: Vec<u8>,
    pub mimetype: String,
}

/// Submit project use case
pub struct SubmitProjectUseCase<E>
where
    E: EnrollmentRepository,
{
    enrollment_repo: Arc<E>,
    config: Arc<ContestConfig>,
}

impl<E> SubmitProjectUseCase<E>
where
    E: EnrollmentRepository,
{
    pub fn new(enrollment_repo: Arc<E>, config: Arc<ContestConfig>) -> Self {
        Self {
            enrollment_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitProjectInput) -> ContestResult<String> {
        let mut enrollment = self
            .enrollment_repo
            .find_by_account_and_competition(
                &AccountId::from_uuid(input.account_id),
                &CompetitionId::from_uuid(input.competition_id),
            )
            .await?
            .ok_or(ContestError::NotEnrolled)?;

        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(ContestError::Validation(
                "Please provide a project description".to_string(),
            ));
        }

        if input.file_name.is_empty() || input.file_data.is_empty() {
            return Err(ContestError::Validation("No selected file".to_string()));
        }

        if input.file_data.len() > self.config.max_upload_bytes {
            return Err(ContestError::Validation(format!(
                "File exceeds the maximum size of {} bytes",
                self.config.max_upload_bytes
            )));
        }

        let ext = file_extension(&input.file_name)
            .ok_or_else(|| ContestError::Validation("File type not allowed".to_string()))?;

        if !extension_allowed(&ext, &self.config.allowed_extensions) {
            return Err(ContestError::Validation("File type not allowed".to_string()));
        }

        if !content_matches_extension(&ext, &input.file_data) {
            return Err(ContestError::Validation(
                "File content does not match its extension".to_string(),
            ));
        }

        let file_name = sanitize_filename(&input.file_name)
            .ok_or_else(|| ContestError::Validation("Invalid filename".to_string()))?;

        enrollment.attach_submission(description, file_name.clone(), input.file_data, input.mimetype);

        self.enrollment_repo.update_submission(&enrollment).await?;

        tracing::info!(
            enrollment_id = %enrollment.enrollment_id,
            file_name = %file_name,
            "Project submitted"
        );

        Ok(file_name)
    }
}
