use serde::{Serialize, Deserialize};

pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Public address of the caller as reported by the fronting proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientIp(pub String);

impl ClientIp {
    pub fn from_forwarded_for(header: Option<&str>) -> Self {
        Self(crate::validation::first_forwarded_ip(header))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;
    use std::convert::Infallible;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientIp {
        type Error = Infallible;

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            Outcome::Success(ClientIp::from_forwarded_for(
                req.headers().get_one(FORWARDED_FOR_HEADER),
            ))
        }
    }
}
