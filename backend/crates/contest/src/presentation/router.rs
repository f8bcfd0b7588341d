//! Contest Router
//!
//! Every route here expects the auth session middleware to have run;
//! the binary layers it on when composing the application.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ContestConfig;
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::infra::postgres::PgContestRepository;
use crate::presentation::handlers::{self, ContestAppState};

/// Create the Contest router with PostgreSQL repository
pub fn contest_router(repo: PgContestRepository, config: ContestConfig) -> Router {
    contest_router_generic(repo, config)
}

/// Create a generic Contest router for any repository implementation
pub fn contest_router_generic<R>(repo: R, config: ContestConfig) -> Router
where
    R: CompetitionRepository + EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let body_limit = config.request_body_limit();

    let state = ContestAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_competitions::<R>).post(handlers::create_competition::<R>),
        )
        .route("/dashboard", get(handlers::dashboard::<R>))
        .route("/{id}", get(handlers::get_competition::<R>))
        .route("/{id}/join", post(handlers::join_competition::<R>))
        .route("/{id}/leave", post(handlers::leave_competition::<R>))
        .route(
            "/{id}/submission",
            post(handlers::submit_project::<R>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/{id}/submissions", get(handlers::list_submissions::<R>))
        .route(
            "/submissions/{enrollment_id}/file",
            get(handlers::download_submission::<R>),
        )
        .route(
            "/{id}/winners",
            get(handlers::list_winners::<R>).post(handlers::submit_winners::<R>),
        )
        .with_state(state)
}
