use actix_web::http::header::{HeaderMap, AUTHORIZATION};

/// Custom header checked before `Authorization`.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

const BEARER_PREFIX: &str = "Bearer ";

/// Raw access token presented by the client, not yet verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Find the token in a request's headers.
    ///
    /// `x-access-token` wins over `Authorization`. Whichever is used, a
    /// leading `Bearer ` is stripped and the rest is trimmed of surrounding
    /// whitespace. Missing, empty, or non-ASCII values yield `None`.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers
            .get(ACCESS_TOKEN_HEADER)
            .or_else(|| headers.get(AUTHORIZATION))?
            .to_str()
            .ok()?;

        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
        if token.is_empty() {
            return None;
        }

        Some(AuthToken {
            token: token.to_string(),
        })
    }
}
