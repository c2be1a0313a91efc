//! JSON envelope shared by every response body.
//!
//! `{ "ok": bool, "message": string }` plus optional `data`, `token` and
//! `error` members, which are omitted when absent.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResponse {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: None,
            token: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            ..Self::success(message)
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Render with the given status.
    pub fn respond(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_optional_members_are_omitted() {
        let body = serde_json::to_value(ApiResponse::success("Successfully Added quote")).unwrap();
        assert_eq!(body, json!({"ok": true, "message": "Successfully Added quote"}));
    }

    #[test]
    fn test_failure_carries_error() {
        let body = serde_json::to_value(
            ApiResponse::failure("Failed to fetch quotes").with_error(Some("boom".into())),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"ok": false, "message": "Failed to fetch quotes", "error": "boom"})
        );
    }

    #[test]
    fn test_login_shape() {
        let body = serde_json::to_value(
            ApiResponse::success("Successfully login")
                .with_data(json!({"username": "luke"}))
                .with_token("abc".into()),
        )
        .unwrap();
        assert_eq!(body["data"]["username"], "luke");
        assert_eq!(body["token"], "abc");
        assert!(body.get("error").is_none());
    }
}
