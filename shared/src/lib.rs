pub mod error;
pub mod models;
pub mod validation;
pub mod client_ip;

pub use error::{ErrorResponse, GateError};
pub use models::*;
pub use validation::*;
pub use client_ip::*;
