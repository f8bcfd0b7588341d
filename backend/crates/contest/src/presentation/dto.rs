//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use kernel::notice::Notice;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Competition, Enrollment};

// ============================================================================
// Competitions
// ============================================================================

/// Create competition request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    /// Free text, validated server-side
    pub fee: String,
    pub date: NaiveDate,
    pub location: String,
    pub prizes: Option<String>,
}

/// Competition representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResponse {
    pub competition_id: Uuid,
    pub name: String,
    pub description: String,
    pub details: String,
    pub fee: f64,
    pub date: NaiveDate,
    pub location: String,
    pub prizes: Option<String>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Competition> for CompetitionResponse {
    fn from(c: &Competition) -> Self {
        Self {
            competition_id: c.competition_id.into_uuid(),
            name: c.name.clone(),
            description: c.description.clone(),
            details: c.details.clone(),
            fee: c.fee.value(),
            date: c.event_date,
            location: c.location.clone(),
            prizes: c.prizes.clone(),
            creator_id: c.creator_id.into_uuid(),
            created_at: c.created_at,
        }
    }
}

/// Create competition response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionResponse {
    pub competition: CompetitionResponse,
    pub notice: Notice,
}

/// Competition listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionListResponse {
    pub competitions: Vec<CompetitionResponse>,
}

/// Dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Competitions the caller has joined
    pub joined: Vec<CompetitionResponse>,
    /// Every competition
    pub competitions: Vec<CompetitionResponse>,
}

// ============================================================================
// Enrollment / Submission
// ============================================================================

/// Join response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub notice: Notice,
}

/// Leave response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    pub notice: Notice,
}

/// Submit project response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProjectResponse {
    pub file_name: String,
    pub notice: Notice,
}

/// Enrollment as seen by the competition creator
///
/// The file bytes themselves are only served by the download route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub enrollment_id: Uuid,
    pub account_id: Uuid,
    pub status: String,
    pub project_description: Option<String>,
    pub project_file_name: Option<String>,
    pub has_file: bool,
    pub submission_date: DateTime<Utc>,
}

impl From<&Enrollment> for SubmissionResponse {
    fn from(e: &Enrollment) -> Self {
        Self {
            enrollment_id: e.enrollment_id.into_uuid(),
            account_id: e.account_id.into_uuid(),
            status: e.status.code().to_string(),
            project_description: e.project_description.clone(),
            project_file_name: e.project_file_name.clone(),
            has_file: e.has_submission(),
            submission_date: e.submission_date,
        }
    }
}

/// Submission listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionResponse>,
}

// ============================================================================
// Winners
// ============================================================================

/// Submit winners request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWinnersRequest {
    pub winner_account_ids: Vec<Uuid>,
}

/// Submit winners response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWinnersResponse {
    /// Number of enrollments whose status was recomputed
    pub updated: u64,
    pub notice: Notice,
}

/// Winner listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerListResponse {
    pub winners: Vec<SubmissionResponse>,
}
