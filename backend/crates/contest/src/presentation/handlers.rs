//! HTTP Handlers
//!
//! All routes here run behind the auth session middleware, which inserts
//! the [`CurrentAccount`] extension.

use axum::Json;
use axum::extract::{Extension, Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::notice::Notice;
use kernel::principal::CurrentAccount;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::ContestConfig;
use crate::application::{
    CreateCompetitionInput, CreateCompetitionUseCase, DashboardUseCase, DownloadSubmissionUseCase,
    GetCompetitionUseCase, JoinCompetitionUseCase, LeaveCompetitionUseCase,
    ListCompetitionsUseCase, ListSubmissionsUseCase, ListWinnersUseCase, SubmitProjectInput,
    SubmitProjectUseCase, SubmitWinnersInput, SubmitWinnersUseCase,
};
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::error::{ContestError, ContestResult};
use crate::presentation::dto::{
    CompetitionListResponse, CompetitionResponse, CreateCompetitionRequest,
    CreateCompetitionResponse, DashboardResponse, JoinResponse, LeaveResponse,
    SubmissionListResponse, SubmissionResponse, SubmitProjectResponse, SubmitWinnersRequest,
    SubmitWinnersResponse, WinnerListResponse,
};

/// Shared state for contest handlers
#[derive(Clone)]
pub struct ContestAppState<R>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ContestConfig>,
}

// ============================================================================
// Competition lifecycle
// ============================================================================

/// POST /api/contests
pub async fn create_competition<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Json(req): Json<CreateCompetitionRequest>,
) -> ContestResult<impl IntoResponse>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCompetitionUseCase::new(state.repo.clone());

    let competition = use_case
        .execute(CreateCompetitionInput {
            creator_id: account.account_id,
            name: req.name,
            description: req.description,
            details: req.details,
            fee: req.fee,
            event_date: req.date,
            location: req.location,
            prizes: req.prizes,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCompetitionResponse {
            competition: CompetitionResponse::from(&competition),
            notice: Notice::success("Competition created successfully!"),
        }),
    ))
}

/// GET /api/contests
pub async fn list_competitions<R>(
    State(state): State<ContestAppState<R>>,
) -> ContestResult<Json<CompetitionListResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCompetitionsUseCase::new(state.repo.clone());
    let competitions = use_case.execute().await?;

    Ok(Json(CompetitionListResponse {
        competitions: competitions.iter().map(CompetitionResponse::from).collect(),
    }))
}

/// GET /api/contests/dashboard
pub async fn dashboard<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
) -> ContestResult<Json<DashboardResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DashboardUseCase::new(state.repo.clone());
    let output = use_case.execute(account.account_id).await?;

    Ok(Json(DashboardResponse {
        joined: output.joined.iter().map(CompetitionResponse::from).collect(),
        competitions: output.all.iter().map(CompetitionResponse::from).collect(),
    }))
}

/// GET /api/contests/{id}
pub async fn get_competition<R>(
    State(state): State<ContestAppState<R>>,
    Path(competition_id): Path<Uuid>,
) -> ContestResult<Json<CompetitionResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCompetitionUseCase::new(state.repo.clone());
    let competition = use_case.execute(competition_id).await?;

    Ok(Json(CompetitionResponse::from(&competition)))
}

// ============================================================================
// Enrollment
// ============================================================================

/// POST /api/contests/{id}/join
pub async fn join_competition<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
) -> ContestResult<Json<JoinResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = JoinCompetitionUseCase::new(state.repo.clone(), state.repo.clone());
    let competition = use_case.execute(account.account_id, competition_id).await?;

    Ok(Json(JoinResponse {
        notice: Notice::success(format!(
            "You have successfully joined the competition: {}",
            competition.name
        )),
    }))
}

/// POST /api/contests/{id}/leave
pub async fn leave_competition<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
) -> ContestResult<Json<LeaveResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = LeaveCompetitionUseCase::new(state.repo.clone());
    let output = use_case.execute(account.account_id, competition_id).await?;

    let notice = if output.left {
        Notice::success("You have successfully left the competition.")
    } else {
        Notice::info("You are not participating in this competition.")
    };

    Ok(Json(LeaveResponse { notice }))
}

// ============================================================================
// Submission
// ============================================================================

/// POST /api/contests/{id}/submission
///
/// Multipart form: `projectFile` (the file) and `projectDescription` (text).
pub async fn submit_project<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
    mut multipart: Multipart,
) -> ContestResult<Json<SubmitProjectResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let mut description = String::new();
    let mut file_name = String::new();
    let mut mimetype = String::new();
    let mut file_data: Vec<u8> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ContestError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("projectFile") => {
                file_name = field.file_name().unwrap_or_default().to_string();
                mimetype = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                file_data = field
                    .bytes()
                    .await
                    .map_err(|e| ContestError::Validation(format!("Malformed upload: {e}")))?
                    .to_vec();
            }
            Some("projectDescription") => {
                description = field
                    .text()
                    .await
                    .map_err(|e| ContestError::Validation(format!("Malformed upload: {e}")))?;
            }
            _ => {}
        }
    }

    let use_case = SubmitProjectUseCase::new(state.repo.clone(), state.config.clone());

    let file_name = use_case
        .execute(SubmitProjectInput {
            account_id: account.account_id,
            competition_id,
            description,
            file_name,
            file_data,
            mimetype,
        })
        .await?;

    Ok(Json(SubmitProjectResponse {
        file_name,
        notice: Notice::success("Project submitted successfully!"),
    }))
}

/// GET /api/contests/{id}/submissions
pub async fn list_submissions<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
) -> ContestResult<Json<SubmissionListResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSubmissionsUseCase::new(state.repo.clone(), state.repo.clone());
    let enrollments = use_case.execute(account.account_id, competition_id).await?;

    Ok(Json(SubmissionListResponse {
        submissions: enrollments.iter().map(SubmissionResponse::from).collect(),
    }))
}

/// GET /api/contests/submissions/{enrollment_id}/file
///
/// Streams the stored bytes back with the original filename and MIME type,
/// forcing attachment disposition.
pub async fn download_submission<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(enrollment_id): Path<Uuid>,
) -> ContestResult<impl IntoResponse>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DownloadSubmissionUseCase::new(state.repo.clone(), state.repo.clone());
    let output = use_case.execute(account.account_id, enrollment_id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, output.mimetype),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", output.file_name),
            ),
        ],
        output.data,
    ))
}

// ============================================================================
// Winners
// ============================================================================

/// POST /api/contests/{id}/winners
pub async fn submit_winners<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
    Json(req): Json<SubmitWinnersRequest>,
) -> ContestResult<Json<SubmitWinnersResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitWinnersUseCase::new(state.repo.clone(), state.repo.clone());

    let updated = use_case
        .execute(SubmitWinnersInput {
            requester_id: account.account_id,
            competition_id,
            winner_account_ids: req.winner_account_ids,
        })
        .await?;

    Ok(Json(SubmitWinnersResponse {
        updated,
        notice: Notice::success("Winners submitted successfully!"),
    }))
}

/// GET /api/contests/{id}/winners
pub async fn list_winners<R>(
    State(state): State<ContestAppState<R>>,
    Extension(account): Extension<CurrentAccount>,
    Path(competition_id): Path<Uuid>,
) -> ContestResult<Json<WinnerListResponse>>
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        ListWinnersUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let winners = use_case.execute(account.account_id, competition_id).await?;

    Ok(Json(WinnerListResponse {
        winners: winners.iter().map(SubmissionResponse::from).collect(),
    }))
}
