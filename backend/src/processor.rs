use rocket::http::{Cookie, CookieJar};
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;
use contest_shared::{models::*, validation::*};
use crate::{error::ApiError, store::VoteStore};

/// One vote attempt as it arrives at the handler.
#[derive(Debug, Clone)]
pub struct VoteRequest {
    pub project_id: Uuid,
    pub contestant_id: Uuid,
    pub ip: String,
    pub now: OffsetDateTime,
}

pub struct VoteProcessor;

impl VoteProcessor {
    /// Runs the gate and dedup checks, then stores the vote and marks the
    /// browser with the dedup cookie.
    pub async fn submit_vote(
        store: &dyn VoteStore,
        request: VoteRequest,
        cookies: &CookieJar<'_>,
    ) -> Result<Vote, ApiError> {
        let project = store
            .find_project(request.project_id)
            .await?
            .ok_or(ApiError::ProjectNotFound)?;

        check_voting_open(&project.config, request.now)?;

        let contestant = store
            .find_contestant(request.contestant_id)
            .await?
            .ok_or(ApiError::ContestantNotFound)?;

        let new_vote = NewVote {
            contestant_id: contestant.id,
            project_id: project.id,
            public_ip_address: request.ip,
            gender: contestant.gender,
        };
        let cookie_name = voted_cookie_name(&project.id, &new_vote.gender);

        if project.config.limit_votes_to_one_per_ip {
            if store.find_vote(&new_vote.filter()).await?.is_some() {
                debug!("Blocked by ip {}", new_vote.public_ip_address);
                return Err(ApiError::IpAlreadyVoted);
            }

            if cookies.get(&cookie_name).is_some() {
                info!("Blocked by cookie");
                return Err(ApiError::CookieAlreadyVoted);
            }
        }

        let vote = store.record_vote(new_vote).await?;

        cookies.add(
            Cookie::build((cookie_name, VOTED_COOKIE_VALUE))
                .secure(true)
                .http_only(true),
        );

        info!("Vote {} recorded for contestant {}", vote.id, vote.contestant_id);
        Ok(vote)
    }

    pub async fn list_votes(store: &dyn VoteStore, project_id: Uuid) -> Result<VoteListResponse, ApiError> {
        let votes = store.votes_for_project(project_id).await?;
        Ok(VoteListResponse::from(votes))
    }
}
