use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use contest_shared::GateError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid project or contestant Id.")]
    InvalidId,
    #[error("This project doesn't exist.")]
    ProjectNotFound,
    #[error("This contestant doesn't exist.")]
    ContestantNotFound,
    #[error(transparent)]
    VotingClosed(#[from] GateError),
    #[error("IpAddress already voted")]
    IpAlreadyVoted,
    #[error("Vote already submitted")]
    CookieAlreadyVoted,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            // Missing records answer 400, not 404.
            ApiError::InvalidId | ApiError::ProjectNotFound | ApiError::ContestantNotFound => Status::BadRequest,
            ApiError::VotingClosed(_) => Status::Locked,
            ApiError::IpAlreadyVoted | ApiError::CookieAlreadyVoted => Status::Forbidden,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
