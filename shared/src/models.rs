use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub use_time: bool,
    pub voting_enabled: bool,
    pub voting_start_day_and_time: OffsetDateTime,
    pub voting_end_day_and_time: OffsetDateTime,
    pub limit_votes_to_one_per_ip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub config: ProjectConfig,
}

#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub gender: String,
    pub counted_votes: i64,
}

#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: Uuid,
    pub contestant_id: Uuid,
    pub project_id: Uuid,
    pub public_ip_address: String,
    pub gender: String,
    pub created_at: OffsetDateTime,
}

/// A vote that passed every check and is about to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVote {
    pub contestant_id: Uuid,
    pub project_id: Uuid,
    pub public_ip_address: String,
    pub gender: String,
}

/// Lookup key for the one-vote-per-IP rule.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteFilter {
    pub public_ip_address: String,
    pub gender: String,
    pub project_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteListResponse {
    pub results: Vec<Vote>,
    pub count: usize,
}

impl NewVote {
    pub fn into_vote(self, id: Uuid, created_at: OffsetDateTime) -> Vote {
        Vote {
            id,
            contestant_id: self.contestant_id,
            project_id: self.project_id,
            public_ip_address: self.public_ip_address,
            gender: self.gender,
            created_at,
        }
    }

    pub fn filter(&self) -> VoteFilter {
        VoteFilter {
            public_ip_address: self.public_ip_address.clone(),
            gender: self.gender.clone(),
            project_id: self.project_id,
        }
    }
}

impl Vote {
    pub fn matches(&self, filter: &VoteFilter) -> bool {
        self.public_ip_address == filter.public_ip_address
            && self.gender == filter.gender
            && self.project_id == filter.project_id
    }
}

impl From<Vec<Vote>> for VoteListResponse {
    fn from(results: Vec<Vote>) -> Self {
        Self { count: results.len(), results }
    }
}
