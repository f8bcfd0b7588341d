//! Domain Entities

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{AccountId, CompetitionId, EnrollmentId};

use crate::domain::value_objects::{EnrollmentStatus, EntryFee};

// ============================================================================
// Competition
// ============================================================================

/// Competition entity
///
/// Immutable after creation; there are no edit or delete operations.
#[derive(Debug, Clone)]
pub struct Competition {
    pub competition_id: CompetitionId,
    pub name: String,
    pub description: String,
    pub details: String,
    pub fee: EntryFee,
    /// Date the competition takes place
    pub event_date: NaiveDate,
    pub location: String,
    pub prizes: Option<String>,
    /// The account that created (and administers) this competition
    pub creator_id: AccountId,
    pub created_at: DateTime<Utc>,
}

impl Competition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        creator_id: AccountId,
        name: String,
        description: String,
        details: String,
        fee: EntryFee,
        event_date: NaiveDate,
        location: String,
        prizes: Option<String>,
    ) -> Self {
        Self {
            competition_id: CompetitionId::new(),
            name,
            description,
            details,
            fee,
            event_date,
            location,
            prizes,
            creator_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the given account administers this competition
    pub fn is_created_by(&self, account_id: &AccountId) -> bool {
        self.creator_id == *account_id
    }
}

// ============================================================================
// Enrollment
// ============================================================================

/// Enrollment entity
///
/// The join record between an account and a competition. Carries the
/// membership status and, once submitted, the project (file bytes inline).
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub account_id: AccountId,
    pub competition_id: CompetitionId,
    pub status: EnrollmentStatus,
    pub project_description: Option<String>,
    pub project_file_name: Option<String>,
    pub project_file_data: Option<Vec<u8>>,
    pub project_file_mimetype: Option<String>,
    /// Defaults to row creation; overwritten on every actual submission
    pub submission_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a fresh enrollment with status `joined`
    pub fn new(account_id: AccountId, competition_id: CompetitionId) -> Self {
        let now = Utc::now();

        Self {
            enrollment_id: EnrollmentId::new(),
            account_id,
            competition_id,
            status: EnrollmentStatus::default(),
            project_description: None,
            project_file_name: None,
            project_file_data: None,
            project_file_mimetype: None,
            submission_date: now,
            created_at: now,
        }
    }

    /// Attach (or replace) the submitted project
    ///
    /// Overwrites all submission fields and stamps the submission date.
    /// The status is deliberately left untouched: resubmitting after a
    /// winner-selection pass does not demote (or promote) anyone.
    pub fn attach_submission(
        &mut self,
        description: String,
        file_name: String,
        file_data: Vec<u8>,
        mimetype: String,
    ) {
        self.project_description = Some(description);
        self.project_file_name = Some(file_name);
        self.project_file_data = Some(file_data);
        self.project_file_mimetype = Some(mimetype);
        self.submission_date = Utc::now();
    }

    /// Whether a project file has been submitted
    pub fn has_submission(&self) -> bool {
        self.project_file_data.is_some()
    }
}
