pub mod access;
pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod processor;
pub mod queries;
pub mod routes;
pub mod store;
pub mod utils;
pub use contest_shared::{models::*, error::*, client_ip::*};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, forbidden, internal_error, not_found, unauthorized},
    cors::CORS,
    routes::{all_options, list_votes, submit_vote, AppState},
};

pub const VOTING_MOUNT: &str = "/api/voting";

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = CORS::new(state.config.allowed_origin.clone());

    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(VOTING_MOUNT, routes![submit_vote, list_votes, all_options])
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                internal_error,
                not_found
            ],
        )
}
