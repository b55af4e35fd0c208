use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;
use contest_shared::models::*;
use crate::store::{StoreError, VoteStore};

const VOTE_COLUMNS: &str = "id, contestant_id, project_id, public_ip_address, gender, created_at";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    use_time: bool,
    voting_enabled: bool,
    voting_start_day_and_time: OffsetDateTime,
    voting_end_day_and_time: OffsetDateTime,
    limit_votes_to_one_per_ip: bool,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            config: ProjectConfig {
                use_time: row.use_time,
                voting_enabled: row.voting_enabled,
                voting_start_day_and_time: row.voting_start_day_and_time,
                voting_end_day_and_time: row.voting_end_day_and_time,
                limit_votes_to_one_per_ip: row.limit_votes_to_one_per_ip,
            },
        }
    }
}

/// Postgres-backed store. Projects and contestants are managed elsewhere.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl VoteStore for PgStore {
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, name, use_time, voting_enabled, voting_start_day_and_time,
                    voting_end_day_and_time, limit_votes_to_one_per_ip
             FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }

    async fn find_contestant(&self, id: Uuid) -> Result<Option<Contestant>, StoreError> {
        let contestant = sqlx::query_as::<_, Contestant>(
            "SELECT id, project_id, name, gender, counted_votes FROM contestants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contestant)
    }

    async fn find_vote(&self, filter: &VoteFilter) -> Result<Option<Vote>, StoreError> {
        let vote = sqlx::query_as::<_, Vote>(&format!(
            "SELECT {VOTE_COLUMNS} FROM votes
             WHERE public_ip_address = $1 AND gender = $2 AND project_id = $3
             LIMIT 1"
        ))
        .bind(&filter.public_ip_address)
        .bind(&filter.gender)
        .bind(filter.project_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vote)
    }

    async fn record_vote(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE contestants SET counted_votes = counted_votes + 1 WHERE id = $1",
        )
        .bind(vote.contestant_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() != 1 {
            tx.rollback().await?;
            return Err(StoreError::NotFound);
        }

        let stored = sqlx::query_as::<_, Vote>(&format!(
            "INSERT INTO votes (id, contestant_id, project_id, public_ip_address, gender)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {VOTE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(vote.contestant_id)
        .bind(vote.project_id)
        .bind(&vote.public_ip_address)
        .bind(&vote.gender)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(stored)
    }

    async fn votes_for_project(&self, project_id: Uuid) -> Result<Vec<Vote>, StoreError> {
        let votes = sqlx::query_as::<_, Vote>(&format!(
            "SELECT {VOTE_COLUMNS} FROM votes WHERE project_id = $1 ORDER BY created_at"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(votes)
    }
}
