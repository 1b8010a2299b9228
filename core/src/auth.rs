//! Login and logout.

use crate::dispatcher::{Dispatcher, CONTENT_TYPE_JSON};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::LoginRequest;

pub const LOGIN_PATH: &str = "/auth/login";
// Logout is served by the login route.
pub const LOGOUT_PATH: &str = "/auth/login";

#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Exchanges credentials for a user token.
    pub fn login(&self, request: &LoginRequest) -> Result<String> {
        let response = self
            .dispatcher
            .post_json(LOGIN_PATH, request, CONTENT_TYPE_JSON)?;
        Envelope::from_response(&response)?.into_identifier()
    }

    pub fn logout(&self, request: &LoginRequest) -> Result<String> {
        let response = self
            .dispatcher
            .post_json(LOGOUT_PATH, request, CONTENT_TYPE_JSON)?;
        Envelope::from_response(&response)?.into_identifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{AUTH_TOKEN_HEADER, PARTNER_TOKEN_HEADER};
    use crate::http::HttpMethod;
    use crate::testing::{client_replying, AUTH, PARTNER};

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_returns_token() {
        let (client, transport) =
            client_replying(200, r#"{"data":"token123","validationErrors":[]}"#);
        let token = client.auth().login(&credentials("a", "b")).unwrap();
        assert_eq!(token, "token123");

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://vplatform.test/auth/login");
        assert_eq!(req.header(PARTNER_TOKEN_HEADER), Some(PARTNER));
        assert_eq!(req.header(AUTH_TOKEN_HEADER), Some(AUTH));
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(
            transport.last_body(),
            serde_json::json!({"username": "a", "password": "b"})
        );
    }

    #[test]
    fn login_reports_validation_errors() {
        let (client, _) = client_replying(
            200,
            r#"{"data":null,"validationErrors":[{"field":"username","message":"required"}]}"#,
        );
        let err = client.auth().login(&credentials("", "")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.len(), 1);
        assert!(err.to_string().contains("username: required"));
    }

    #[test]
    fn login_rejects_non_string_data() {
        let (client, _) = client_replying(200, r#"{"data":{"token":"x"},"validationErrors":[]}"#);
        let err = client.auth().login(&credentials("a", "b")).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn logout_posts_to_login_path() {
        let (client, transport) = client_replying(200, r#"{"data":"bye","validationErrors":[]}"#);
        let reply = client.auth().logout(&credentials("a", "b")).unwrap();
        assert_eq!(reply, "bye");
        assert_eq!(transport.last().url, "http://vplatform.test/auth/login");
        assert_eq!(transport.last().header("content-type"), Some("application/json"));
    }
}
