use serde::{Serialize, Deserialize};
use thiserror::Error;

pub const VOTING_LOCKED_MESSAGE: &str = "Sorry, you cannot vote at the moment. Voting has been temporarily locked by the administrator. Please try again later.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GateError {
    #[error("{}", VOTING_LOCKED_MESSAGE)]
    Locked,
    #[error("No votes allowed at the moment. Voting begins {day} at {time}")]
    OutsideWindow { day: String, time: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }
}
