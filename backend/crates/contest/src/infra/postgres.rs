//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Competition, Enrollment};
use crate::domain::repository::{CompetitionRepository, EnrollmentRepository};
use crate::domain::value_objects::{EnrollmentStatus, EntryFee};
use crate::error::{ContestError, ContestResult};
use kernel::id::{AccountId, CompetitionId, EnrollmentId};

/// PostgreSQL-backed contest repository
#[derive(Clone)]
pub struct PgContestRepository {
    pool: PgPool,
}

impl PgContestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Competition Repository Implementation
// ============================================================================

impl CompetitionRepository for PgContestRepository {
    async fn create(&self, competition: &Competition) -> ContestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO competitions (
                competition_id,
                name,
                description,
                details,
                fee,
                event_date,
                location,
                prizes,
                creator_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(competition.competition_id.as_uuid())
        .bind(&competition.name)
        .bind(&competition.description)
        .bind(&competition.details)
        .bind(competition.fee.value())
        .bind(competition.event_date)
        .bind(&competition.location)
        .bind(&competition.prizes)
        .bind(competition.creator_id.as_uuid())
        .bind(competition.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Option<Competition>> {
        let row = sqlx::query_as::<_, CompetitionRow>(
            r#"
            SELECT
                competition_id,
                name,
                description,
                details,
                fee,
                event_date,
                location,
                prizes,
                creator_id,
                created_at
            FROM competitions
            WHERE competition_id = $1
            "#,
        )
        .bind(competition_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_competition()).transpose()
    }

    async fn list_all(&self) -> ContestResult<Vec<Competition>> {
        let rows = sqlx::query_as::<_, CompetitionRow>(
            r#"
            SELECT
                competition_id,
                name,
                description,
                details,
                fee,
                event_date,
                location,
                prizes,
                creator_id,
                created_at
            FROM competitions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_competition()).collect()
    }

    async fn list_joined_by(&self, account_id: &AccountId) -> ContestResult<Vec<Competition>> {
        let rows = sqlx::query_as::<_, CompetitionRow>(
            r#"
            SELECT
                c.competition_id,
                c.name,
                c.description,
                c.details,
                c.fee,
                c.event_date,
                c.location,
                c.prizes,
                c.creator_id,
                c.created_at
            FROM competitions c
            JOIN enrollments e ON e.competition_id = c.competition_id
            WHERE e.account_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_competition()).collect()
    }
}

// ============================================================================
// Enrollment Repository Implementation
// ============================================================================

impl EnrollmentRepository for PgContestRepository {
    async fn create(&self, enrollment: &Enrollment) -> ContestResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (
                enrollment_id,
                account_id,
                competition_id,
                status,
                project_description,
                project_file_name,
                project_file_data,
                project_file_mimetype,
                submission_date,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(enrollment.enrollment_id.as_uuid())
        .bind(enrollment.account_id.as_uuid())
        .bind(enrollment.competition_id.as_uuid())
        .bind(enrollment.status.id())
        .bind(&enrollment.project_description)
        .bind(&enrollment.project_file_name)
        .bind(&enrollment.project_file_data)
        .bind(&enrollment.project_file_mimetype)
        .bind(enrollment.submission_date)
        .bind(enrollment.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique constraint on (account_id, competition_id) is the
            // canonical double-join signal
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                Err(ContestError::AlreadyEnrolled)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, enrollment_id: &EnrollmentId) -> ContestResult<Option<Enrollment>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT
                enrollment_id,
                account_id,
                competition_id,
                status,
                project_description,
                project_file_name,
                project_file_data,
                project_file_mimetype,
                submission_date,
                created_at
            FROM enrollments
            WHERE enrollment_id = $1
            "#,
        )
        .bind(enrollment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_enrollment()).transpose()
    }

    async fn find_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<Option<Enrollment>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT
                enrollment_id,
                account_id,
                competition_id,
                status,
                project_description,
                project_file_name,
                project_file_data,
                project_file_mimetype,
                submission_date,
                created_at
            FROM enrollments
            WHERE account_id = $1 AND competition_id = $2
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(competition_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_enrollment()).transpose()
    }

    async fn list_by_competition(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Vec<Enrollment>> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT
                enrollment_id,
                account_id,
                competition_id,
                status,
                project_description,
                project_file_name,
                project_file_data,
                project_file_mimetype,
                submission_date,
                created_at
            FROM enrollments
            WHERE competition_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(competition_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_enrollment()).collect()
    }

    async fn list_winners(
        &self,
        competition_id: &CompetitionId,
    ) -> ContestResult<Vec<Enrollment>> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT
                enrollment_id,
                account_id,
                competition_id,
                status,
                project_description,
                project_file_name,
                project_file_data,
                project_file_mimetype,
                submission_date,
                created_at
            FROM enrollments
            WHERE competition_id = $1 AND status = $2
            ORDER BY created_at
            "#,
        )
        .bind(competition_id.as_uuid())
        .bind(EnrollmentStatus::Winner.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_enrollment()).collect()
    }

    async fn update_submission(&self, enrollment: &Enrollment) -> ContestResult<()> {
        sqlx::query(
            r#"
            UPDATE enrollments SET
                project_description = $2,
                project_file_name = $3,
                project_file_data = $4,
                project_file_mimetype = $5,
                submission_date = $6
            WHERE enrollment_id = $1
            "#,
        )
        .bind(enrollment.enrollment_id.as_uuid())
        .bind(&enrollment.project_description)
        .bind(&enrollment.project_file_name)
        .bind(&enrollment.project_file_data)
        .bind(&enrollment.project_file_mimetype)
        .bind(enrollment.submission_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_account_and_competition(
        &self,
        account_id: &AccountId,
        competition_id: &CompetitionId,
    ) -> ContestResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM enrollments WHERE account_id = $1 AND competition_id = $2",
        )
        .bind(account_id.as_uuid())
        .bind(competition_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }

    async fn replace_winners(
        &self,
        competition_id: &CompetitionId,
        winner_account_ids: &[Uuid],
    ) -> ContestResult<u64> {
        // One statement so the full replace is atomic
        let updated = sqlx::query(
            r#"
            UPDATE enrollments
            SET status = CASE
                WHEN account_id = ANY($2) THEN $3::smallint
                ELSE $4::smallint
            END
            WHERE competition_id = $1
            "#,
        )
        .bind(competition_id.as_uuid())
        .bind(winner_account_ids)
        .bind(EnrollmentStatus::Winner.id())
        .bind(EnrollmentStatus::Participant.id())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CompetitionRow {
    competition_id: Uuid,
    name: String,
    description: String,
    details: String,
    fee: f64,
    event_date: NaiveDate,
    location: String,
    prizes: Option<String>,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
}

impl CompetitionRow {
    fn into_competition(self) -> ContestResult<Competition> {
        let fee = EntryFee::new(self.fee)
            .map_err(|e| ContestError::Internal(format!("Corrupt fee in storage: {e}")))?;

        Ok(Competition {
            competition_id: CompetitionId::from_uuid(self.competition_id),
            name: self.name,
            description: self.description,
            details: self.details,
            fee,
            event_date: self.event_date,
            location: self.location,
            prizes: self.prizes,
            creator_id: AccountId::from_uuid(self.creator_id),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    enrollment_id: Uuid,
    account_id: Uuid,
    competition_id: Uuid,
    status: i16,
    project_description: Option<String>,
    project_file_name: Option<String>,
    project_file_data: Option<Vec<u8>>,
    project_file_mimetype: Option<String>,
    submission_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl EnrollmentRow {
    fn into_enrollment(self) -> ContestResult<Enrollment> {
        let status = EnrollmentStatus::from_id(self.status).ok_or_else(|| {
            ContestError::Internal(format!("Corrupt enrollment status in storage: {}", self.status))
        })?;

        Ok(Enrollment {
            enrollment_id: EnrollmentId::from_uuid(self.enrollment_id),
            account_id: AccountId::from_uuid(self.account_id),
            competition_id: CompetitionId::from_uuid(self.competition_id),
            status,
            project_description: self.project_description,
            project_file_name: self.project_file_name,
            project_file_data: self.project_file_data,
            project_file_mimetype: self.project_file_mimetype,
            submission_date: self.submission_date,
            created_at: self.created_at,
        })
    }
}
