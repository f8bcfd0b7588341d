//! Unit tests for the contest crate
//!
//! Use cases are exercised against an in-memory repository that mimics the
//! database constraints (notably the unique (account, competition) pair),
//! so the full join/submit/winner flows run without Postgres.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::config::ContestConfig;
use crate::application::{
    CreateCompetitionInput, CreateCompetitionUseCase, DashboardUseCase, DownloadSubmissionUseCase,
    GetCompetitionUseCase, JoinCompetitionUseCase, LeaveCompetitionUseCase,
    ListSubmissionsUseCase, ListWinnersUseCase, SubmitProjectInput, SubmitProjectUseCase,
    SubmitWinnersInput, SubmitWinnersUseCase,
};
use crate::domain::entities::{Competition, Enrollment};
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::domain::value_objects::EnrollmentStatus;
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId, EnrollmentId};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemContestRepository {
    competitions: Arc<Mutex<HashMap<Uuid, Competition>>>,
    enrollments: Arc<Mutex<HashMap<Uuid, Enrollment>>>,
}

impl CompetitionRepository for MemContestRepository {
    async fn create(&self, competition: &Competition) -> ContestResult<()> {
        self.competitions
            .lock()
            .unwrap()
            .insert(competition.competition_id.into_uuid(), competition.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Option<Competition>> {
        Ok(self
            .competitions
            .lock()
            .unwrap()
            .get(competition_id.as_uuid())
            .cloned())
    }

    async fn list_all(&self) -> ContestResult<Vec<Competition>> {
        Ok(self.competitions.lock().unwrap().values().cloned().collect())
    }

    async fn list_joined_by(&self, account_id: &AccountId) -> ContestResult<Vec<Competition>> {
        let joined: Vec<Uuid> = self
            .enrollments
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.account_id == *account_id)
            .map(|e| e.competition_id.into_uuid())
            .collect();

        Ok(self
            .competitions
            .lock()
            .unwrap()
            .values()
            .filter(|c| joined.contains(c.competition_id.as_uuid()))
            .cloned()
            .collect())
    }
}

impl EnrollmentRepository for MemContestRepository {
    async fn create(&self, enrollment: &Enrollment) -> ContestResult<()> {
        let mut enrollments = self.enrollments.lock().unwrap();

        // Mimic the unique constraint on (account_id, competition_id)
        let duplicate = enrollments.values().any(|e| {
            e.account_id == enrollment.account_id && e.competition_id == enrollment.competition_id
        });
        if duplicate {
            return Err(ContestError::AlreadyEnrolled);
        }

        enrollments.insert(enrollment.enrollment_id.into_uuid(), enrollment.clone());
        Ok(())
    }

    async fn find_by_id(&self, enrollment_id: &EnrollmentId) -> ContestResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .get(enrollment_id.as_uuid())
            .cloned())
    }

    async fn find_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .values()
            .find(|e| e.account_id == *account_id && e.competition_id == *competition_id)
            .cloned())
    }

    async fn list_by_competition(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.competition_id == *competition_id)
            .cloned()
            .collect())
    }

    async fn list_winners(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .values()
            .filter(|e| {
                e.competition_id == *competition_id && e.status == EnrollmentStatus::Winner
            })
            .cloned()
            .collect())
    }

    async fn update_submission(&self, enrollment: &Enrollment) -> ContestResult<()> {
        self.enrollments
            .lock()
            .unwrap()
            .insert(enrollment.enrollment_id.into_uuid(), enrollment.clone());
        Ok(())
    }

    async fn delete_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<bool> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let before = enrollments.len();
        enrollments
            .retain(|_, e| !(e.account_id == *account_id && e.competition_id == *competition_id));
        Ok(enrollments.len() < before)
    }

    async fn replace_winners(
        &self,
        competition_id: &CompetitionId,
        winner_account_ids: &[Uuid],
    ) -> ContestResult<u64> {
        let mut updated = 0u64;
        for enrollment in self.enrollments.lock().unwrap().values_mut() {
            if enrollment.competition_id != *competition_id {
                continue;
            }
            enrollment.status = if winner_account_ids.contains(enrollment.account_id.as_uuid()) {
                EnrollmentStatus::Winner
            } else {
                EnrollmentStatus::Participant
            };
            updated += 1;
        }
        Ok(updated)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.7 minimal test document".to_vec()
}

async fn create_competition(
    repo: &Arc<MemContestRepository>,
    creator: Uuid,
    name: &str,
    fee: &str,
) -> ContestResult<Competition> {
    let use_case = CreateCompetitionUseCase::new(repo.clone());
    use_case
        .execute(CreateCompetitionInput {
            creator_id: creator,
            name: name.to_string(),
            description: "a competition".to_string(),
            details: "details".to_string(),
            fee: fee.to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            location: "Berlin".to_string(),
            prizes: Some("glory".to_string()),
        })
        .await
}

async fn join(
    repo: &Arc<MemContestRepository>,
    account: Uuid,
    competition: &Competition,
) -> ContestResult<Competition> {
    let use_case = JoinCompetitionUseCase::new(repo.clone(), repo.clone());
    use_case
        .execute(account, competition.competition_id.into_uuid())
        .await
}

async fn submit(
    repo: &Arc<MemContestRepository>,
    config: &Arc<ContestConfig>,
    account: Uuid,
    competition: &Competition,
    description: &str,
    file_name: &str,
    file_data: Vec<u8>,
) -> ContestResult<String> {
    let use_case = SubmitProjectUseCase::new(repo.clone(), config.clone());
    use_case
        .execute(SubmitProjectInput {
            account_id: account,
            competition_id: competition.competition_id.into_uuid(),
            description: description.to_string(),
            file_name: file_name.to_string(),
            file_data,
            mimetype: "application/pdf".to_string(),
        })
        .await
}

// ============================================================================
// Competition lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_competition_rejects_bad_fee() {
    let repo = Arc::new(MemContestRepository::default());
    let creator = Uuid::new_v4();

    let err = create_competition(&repo, creator, "Hack1", "ten dollars")
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));

    let err = create_competition(&repo, creator, "Hack1", "-5")
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));

    assert!(repo.competitions.lock().unwrap().is_empty());

    // A valid fee persists
    let competition = create_competition(&repo, creator, "Hack1", "10.0")
        .await
        .unwrap();
    assert_eq!(competition.fee.value(), 10.0);
}

#[tokio::test]
async fn test_get_competition_not_found() {
    let repo = Arc::new(MemContestRepository::default());
    let use_case = GetCompetitionUseCase::new(repo.clone());

    let err = use_case.execute(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ContestError::CompetitionNotFound));
}

#[tokio::test]
async fn test_dashboard_splits_joined_from_all() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let c1 = create_competition(&repo, alice, "Hack1", "0").await.unwrap();
    let _c2 = create_competition(&repo, alice, "Hack2", "0").await.unwrap();

    join(&repo, bob, &c1).await.unwrap();

    let use_case = DashboardUseCase::new(repo.clone());
    let output = use_case.execute(bob).await.unwrap();

    assert_eq!(output.joined.len(), 1);
    assert_eq!(output.all.len(), 2);
    assert_eq!(
        output.joined[0].competition_id.into_uuid(),
        c1.competition_id.into_uuid()
    );
}

// ============================================================================
// Enrollment
// ============================================================================

#[tokio::test]
async fn test_double_join_yields_one_enrollment() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();

    join(&repo, bob, &competition).await.unwrap();
    let err = join(&repo, bob, &competition).await.unwrap_err();
    assert!(matches!(err, ContestError::AlreadyEnrolled));

    assert_eq!(repo.enrollments.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_join_missing_competition() {
    let repo = Arc::new(MemContestRepository::default());
    let use_case = JoinCompetitionUseCase::new(repo.clone(), repo.clone());

    let err = use_case
        .execute(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::CompetitionNotFound));
}

#[tokio::test]
async fn test_leave_is_noop_when_not_enrolled() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();

    let use_case = LeaveCompetitionUseCase::new(repo.clone());

    // Not enrolled: an informational no-op, not an error
    let output = use_case
        .execute(bob, competition.competition_id.into_uuid())
        .await
        .unwrap();
    assert!(!output.left);

    // Enrolled: actually leaves
    join(&repo, bob, &competition).await.unwrap();
    let output = use_case
        .execute(bob, competition.competition_id.into_uuid())
        .await
        .unwrap();
    assert!(output.left);
    assert!(repo.enrollments.lock().unwrap().is_empty());
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_requires_enrollment() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();

    let err = submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", pdf_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::NotEnrolled));
}

#[tokio::test]
async fn test_submit_rejects_disallowed_extension() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let err = submit(
        &repo,
        &config,
        bob,
        &competition,
        "my entry",
        "proj.exe",
        b"MZ\x90\x00".to_vec(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));

    // The enrollment was not mutated
    let enrollment = repo
        .find_by_account_and_competition(
            &AccountId::from_uuid(bob),
            &competition.competition_id,
        )
        .await
        .unwrap()
        .unwrap();
    assert!(!enrollment.has_submission());
    assert!(enrollment.project_description.is_none());
}

#[tokio::test]
async fn test_submit_rejects_empty_description_and_missing_file() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let err = submit(&repo, &config, bob, &competition, "   ", "proj.pdf", pdf_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));

    let err = submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));
}

#[tokio::test]
async fn test_submit_rejects_spoofed_content() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    // .pdf extension, executable content
    let err = submit(
        &repo,
        &config,
        bob,
        &competition,
        "my entry",
        "proj.pdf",
        b"MZ\x90\x00\x03 definitely not a pdf".to_vec(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));
}

#[tokio::test]
async fn test_submit_rejects_oversized_file() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig {
        max_upload_bytes: 64,
        ..Default::default()
    });
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let mut big = pdf_bytes();
    big.resize(65, b'x');

    let err = submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", big)
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));
}

#[tokio::test]
async fn test_submit_overwrites_submission_fields() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", pdf_bytes())
        .await
        .unwrap();

    let enrollment = repo
        .find_by_account_and_competition(
            &AccountId::from_uuid(bob),
            &competition.competition_id,
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(enrollment.project_file_name.as_deref(), Some("proj.pdf"));
    assert_eq!(enrollment.project_description.as_deref(), Some("my entry"));
    assert_eq!(enrollment.project_file_data.as_deref(), Some(&pdf_bytes()[..]));
    assert_eq!(
        enrollment.project_file_mimetype.as_deref(),
        Some("application/pdf")
    );
    // Submission never changes the status
    assert_eq!(enrollment.status, EnrollmentStatus::Joined);
}

// ============================================================================
// Submissions view / download
// ============================================================================

#[tokio::test]
async fn test_list_submissions_creator_only() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let use_case = ListSubmissionsUseCase::new(repo.clone(), repo.clone());

    let err = use_case
        .execute(bob, competition.competition_id.into_uuid())
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));

    // Creator sees every enrollment, including those without a file
    let submissions = use_case
        .execute(alice, competition.competition_id.into_uuid())
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
    assert!(!submissions[0].has_submission());
}

#[tokio::test]
async fn test_download_forbidden_for_non_creator() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let mallory = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let enrollment_id = repo
        .find_by_account_and_competition(
            &AccountId::from_uuid(bob),
            &competition.competition_id,
        )
        .await
        .unwrap()
        .unwrap()
        .enrollment_id
        .into_uuid();

    let use_case = DownloadSubmissionUseCase::new(repo.clone(), repo.clone());

    // Forbidden before any file exists...
    let err = use_case.execute(mallory, enrollment_id).await.unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));

    submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", pdf_bytes())
        .await
        .unwrap();

    // ...and after, regardless of the stored file. Even the submitter
    // cannot download through this route.
    let err = use_case.execute(mallory, enrollment_id).await.unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));
    let err = use_case.execute(bob, enrollment_id).await.unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));
}

#[tokio::test]
async fn test_download_returns_stored_bytes() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let enrollment_id = repo
        .find_by_account_and_competition(
            &AccountId::from_uuid(bob),
            &competition.competition_id,
        )
        .await
        .unwrap()
        .unwrap()
        .enrollment_id
        .into_uuid();

    let use_case = DownloadSubmissionUseCase::new(repo.clone(), repo.clone());

    // Nothing stored yet
    let err = use_case.execute(alice, enrollment_id).await.unwrap_err();
    assert!(matches!(err, ContestError::NoSubmission));

    submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", pdf_bytes())
        .await
        .unwrap();

    let output = use_case.execute(alice, enrollment_id).await.unwrap();
    assert_eq!(output.file_name, "proj.pdf");
    assert_eq!(output.mimetype, "application/pdf");
    assert_eq!(output.data, pdf_bytes());

    // Unknown enrollment id
    let err = use_case.execute(alice, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ContestError::EnrollmentNotFound));
}

// ============================================================================
// Winners
// ============================================================================

#[tokio::test]
async fn test_submit_winners_full_replace() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, a, &competition).await.unwrap();
    join(&repo, b, &competition).await.unwrap();

    let use_case = SubmitWinnersUseCase::new(repo.clone(), repo.clone());
    let competition_id = competition.competition_id.into_uuid();

    let status_of = |account: Uuid| {
        let repo = repo.clone();
        let competition_id = competition.competition_id;
        async move {
            repo.find_by_account_and_competition(&AccountId::from_uuid(account), &competition_id)
                .await
                .unwrap()
                .unwrap()
                .status
        }
    };

    // First pass: A wins, B becomes participant
    use_case
        .execute(SubmitWinnersInput {
            requester_id: alice,
            competition_id,
            winner_account_ids: vec![a],
        })
        .await
        .unwrap();

    assert_eq!(status_of(a).await, EnrollmentStatus::Winner);
    assert_eq!(status_of(b).await, EnrollmentStatus::Participant);

    // Second pass fully replaces the first: A is demoted, B wins
    use_case
        .execute(SubmitWinnersInput {
            requester_id: alice,
            competition_id,
            winner_account_ids: vec![b],
        })
        .await
        .unwrap();

    assert_eq!(status_of(a).await, EnrollmentStatus::Participant);
    assert_eq!(status_of(b).await, EnrollmentStatus::Winner);
}

#[tokio::test]
async fn test_submit_winners_guards() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let use_case = SubmitWinnersUseCase::new(repo.clone(), repo.clone());
    let competition_id = competition.competition_id.into_uuid();

    // Only the creator may select winners
    let err = use_case
        .execute(SubmitWinnersInput {
            requester_id: bob,
            competition_id,
            winner_account_ids: vec![bob],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));

    // Empty selection is invalid
    let err = use_case
        .execute(SubmitWinnersInput {
            requester_id: alice,
            competition_id,
            winner_account_ids: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Validation(_)));
}

#[tokio::test]
async fn test_list_winners_visibility_is_configurable() {
    let repo = Arc::new(MemContestRepository::default());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let mallory = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();

    let winners = SubmitWinnersUseCase::new(repo.clone(), repo.clone());
    winners
        .execute(SubmitWinnersInput {
            requester_id: alice,
            competition_id: competition.competition_id.into_uuid(),
            winner_account_ids: vec![bob],
        })
        .await
        .unwrap();

    let competition_id = competition.competition_id.into_uuid();

    // Default: creator-only
    let creator_only = ListWinnersUseCase::new(
        repo.clone(),
        repo.clone(),
        Arc::new(ContestConfig::default()),
    );
    assert!(creator_only.execute(alice, competition_id).await.is_ok());
    let err = creator_only.execute(bob, competition_id).await.unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));

    // Opt-in: enrolled participants may look, strangers still may not
    let participants_too = ListWinnersUseCase::new(
        repo.clone(),
        repo.clone(),
        Arc::new(ContestConfig {
            winners_visible_to_participants: true,
            ..Default::default()
        }),
    );
    let list = participants_too.execute(bob, competition_id).await.unwrap();
    assert_eq!(list.len(), 1);
    let err = participants_too
        .execute(mallory, competition_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ContestError::Forbidden));
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn test_full_competition_flow() {
    let repo = Arc::new(MemContestRepository::default());
    let config = Arc::new(ContestConfig::default());

    // alice creates Hack1, bob joins and submits
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let competition = create_competition(&repo, alice, "Hack1", "10.0").await.unwrap();
    join(&repo, bob, &competition).await.unwrap();
    submit(&repo, &config, bob, &competition, "my entry", "proj.pdf", pdf_bytes())
        .await
        .unwrap();

    let competition_id = competition.competition_id.into_uuid();

    // alice reviews the submissions
    let submissions = ListSubmissionsUseCase::new(repo.clone(), repo.clone())
        .execute(alice, competition_id)
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].account_id.into_uuid(), bob);
    assert_eq!(submissions[0].project_file_name.as_deref(), Some("proj.pdf"));

    // alice picks bob as the winner
    SubmitWinnersUseCase::new(repo.clone(), repo.clone())
        .execute(SubmitWinnersInput {
            requester_id: alice,
            competition_id,
            winner_account_ids: vec![bob],
        })
        .await
        .unwrap();

    let winners = ListWinnersUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(alice, competition_id)
        .await
        .unwrap();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].account_id.into_uuid(), bob);
    assert_eq!(winners[0].status, EnrollmentStatus::Winner);
}
