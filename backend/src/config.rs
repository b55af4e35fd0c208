use tracing::warn;

pub const BASE_ACCESS_TOKEN_KEY: &str = "BASE_ACCESS_TOKEN";
pub const CORS_ALLOWED_ORIGIN_KEY: &str = "CORS_ALLOWED_ORIGIN";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Token required by the vote listing route. `None` closes the route.
    pub base_access_token: Option<String>,
    /// Origin that receives CORS headers, with or without an explicit port.
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_access_token: None,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.into(),
        }
    }
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_access_token = lookup(BASE_ACCESS_TOKEN_KEY).filter(|token| !token.is_empty());
        if base_access_token.is_none() {
            warn!("{} not found - vote listing will be refused", BASE_ACCESS_TOKEN_KEY);
        }

        Self {
            base_access_token,
            allowed_origin: lookup(CORS_ALLOWED_ORIGIN_KEY)
                .map(|origin| origin.trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into()),
        }
    }

    pub fn with_base_access_token(mut self, token: impl Into<String>) -> Self {
        self.base_access_token = Some(token.into());
        self
    }
}
