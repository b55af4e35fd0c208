use std::sync::Arc;
use rocket::{State, get, post, http::{CookieJar, Status}, serde::json::Json};
use time::OffsetDateTime;
use tracing::instrument;
use contest_shared::{client_ip::ClientIp, models::VoteListResponse};
use crate::{
    access::BaseAccess,
    config::AppConfig,
    error::ApiError,
    processor::{VoteProcessor, VoteRequest},
    store::VoteStore,
    utils::parse_id,
};

pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>, config: AppConfig) -> Self {
        Self { store, config }
    }
}

#[instrument(skip(state, cookies))]
#[post("/<project_id>/<contestant_id>")]
pub async fn submit_vote(
    state: &State<AppState>,
    project_id: &str,
    contestant_id: &str,
    client_ip: ClientIp,
    cookies: &CookieJar<'_>,
) -> Result<(Status, &'static str), ApiError> {
    let request = VoteRequest {
        project_id: parse_id(project_id)?,
        contestant_id: parse_id(contestant_id)?,
        ip: client_ip.0,
        now: OffsetDateTime::now_utc(),
    };

    VoteProcessor::submit_vote(state.store.as_ref(), request, cookies).await?;
    Ok((Status::Created, "Voted!"))
}

#[instrument(skip(state, _access))]
#[get("/<project_id>")]
pub async fn list_votes(
    _access: BaseAccess,
    state: &State<AppState>,
    project_id: &str,
) -> Result<Json<VoteListResponse>, ApiError> {
    let project_id = parse_id(project_id)?;
    VoteProcessor::list_votes(state.store.as_ref(), project_id)
        .await
        .map(Json)
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
