use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use ring::constant_time::verify_slices_are_equal;
use tracing::{debug, warn};
use crate::routes::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Request guard for administrative reads. Passes only when the caller
/// presents the configured token as `Authorization: Bearer <token>`.
pub struct BaseAccess;

#[derive(Debug, PartialEq)]
pub enum AccessError {
    NotConfigured,
    MissingToken,
    InvalidToken,
}

fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn check_token(expected: Option<&str>, header: Option<&str>) -> Result<(), AccessError> {
    let expected = expected.ok_or(AccessError::NotConfigured)?;
    let presented = bearer_token(header).ok_or(AccessError::MissingToken)?;
    verify_slices_are_equal(expected.as_bytes(), presented.as_bytes())
        .map_err(|_| AccessError::InvalidToken)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BaseAccess {
    type Error = AccessError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = req.rocket().state::<AppState>() else {
            return Outcome::Error((Status::InternalServerError, AccessError::NotConfigured));
        };

        match check_token(
            state.config.base_access_token.as_deref(),
            req.headers().get_one("Authorization"),
        ) {
            Ok(()) => Outcome::Success(BaseAccess),
            Err(AccessError::NotConfigured) => {
                warn!("Base access requested but no token is configured");
                Outcome::Error((Status::Forbidden, AccessError::NotConfigured))
            }
            Err(e) => {
                debug!("Base access denied: {:?}", e);
                Outcome::Error((Status::Unauthorized, e))
            }
        }
    }
}
