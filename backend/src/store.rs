use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use time::OffsetDateTime;
use uuid::Uuid;
use contest_shared::models::*;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error("Failed to acquire store lock")]
    LockFailed,
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Document access needed by the voting routes.
#[rocket::async_trait]
pub trait VoteStore: Send + Sync {
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, StoreError>;

    async fn find_contestant(&self, id: Uuid) -> Result<Option<Contestant>, StoreError>;

    async fn find_vote(&self, filter: &VoteFilter) -> Result<Option<Vote>, StoreError>;

    /// Bumps the contestant's counter and stores the vote as one unit.
    async fn record_vote(&self, vote: NewVote) -> Result<Vote, StoreError>;

    async fn votes_for_project(&self, project_id: Uuid) -> Result<Vec<Vote>, StoreError>;
}

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<Uuid, Project>,
    contestants: HashMap<Uuid, Contestant>,
    votes: Vec<Vote>,
}

/// In-process store; every operation runs under a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::LockFailed)
    }

    pub fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        self.lock()?.projects.insert(project.id, project);
        Ok(())
    }

    pub fn insert_contestant(&self, contestant: Contestant) -> Result<(), StoreError> {
        self.lock()?.contestants.insert(contestant.id, contestant);
        Ok(())
    }

    pub fn insert_vote(&self, vote: Vote) -> Result<(), StoreError> {
        self.lock()?.votes.push(vote);
        Ok(())
    }

    pub fn vote_count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.votes.len())
    }
}

#[rocket::async_trait]
impl VoteStore for MemoryStore {
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        Ok(self.lock()?.projects.get(&id).cloned())
    }

    async fn find_contestant(&self, id: Uuid) -> Result<Option<Contestant>, StoreError> {
        Ok(self.lock()?.contestants.get(&id).cloned())
    }

    async fn find_vote(&self, filter: &VoteFilter) -> Result<Option<Vote>, StoreError> {
        Ok(self.lock()?.votes.iter().find(|vote| vote.matches(filter)).cloned())
    }

    async fn record_vote(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let mut tables = self.lock()?;
        let contestant = tables
            .contestants
            .get_mut(&vote.contestant_id)
            .ok_or(StoreError::NotFound)?;
        contestant.counted_votes += 1;

        let vote = vote.into_vote(Uuid::new_v4(), OffsetDateTime::now_utc());
        tables.votes.push(vote.clone());
        Ok(vote)
    }

    async fn votes_for_project(&self, project_id: Uuid) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .lock()?
            .votes
            .iter()
            .filter(|vote| vote.project_id == project_id)
            .cloned()
            .collect())
    }
}
