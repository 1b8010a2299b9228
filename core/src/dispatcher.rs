//! Attaches credentials to every request and hands it to the transport.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ErrorCause, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

pub const PARTNER_TOKEN_HEADER: &str = "vplatform-partner-token";
pub const AUTH_TOKEN_HEADER: &str = "vplatform-auth-token";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_JSON_PATCH: &str = "application/json-patch+json";

/// Shared request path for all services of one `Client`.
#[derive(Clone)]
pub struct Dispatcher {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the request for `path` without sending it.
    ///
    /// Credential headers come first. `extra_headers` are applied in order and
    /// replace any earlier header of the same name.
    pub fn build(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> HttpRequest {
        let mut headers = vec![
            (
                PARTNER_TOKEN_HEADER.to_string(),
                self.config.partner_token.clone(),
            ),
            (AUTH_TOKEN_HEADER.to_string(), self.config.auth_token.clone()),
        ];
        for (name, value) in extra_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.to_string(), value.to_string()));
        }

        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url),
            headers,
            body,
        }
    }

    /// Sends one request. Transport failures are returned immediately, with no retry.
    pub fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse> {
        let request = self.build(method, path, body, extra_headers);
        tracing::debug!(method = method.as_str(), path, "dispatching vplatform request");

        match self.transport.execute(request) {
            Ok(response) => {
                tracing::debug!(status = response.status, path, "vplatform response received");
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(method = method.as_str(), path, error = %err, "vplatform request failed");
                Err(ErrorCause::Transport(err).into())
            }
        }
    }

    /// Serializes `body` as JSON and posts it with the given content type.
    pub fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        content_type: &str,
    ) -> Result<HttpResponse> {
        let body = serde_json::to_string(body)
            .map_err(|e| ErrorCause::Serialization(e.to_string()))?;
        self.dispatch(
            HttpMethod::Post,
            path,
            Some(body),
            &[("Content-Type", content_type)],
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::transport::TransportError;

    struct Recorder {
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Transport for Recorder {
        fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: "{}".to_string(),
            })
        }
    }

    struct Refused;

    impl Transport for Refused {
        fn execute(&self, _request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            Err(TransportError::Io("connection refused".to_string()))
        }
    }

    fn dispatcher(transport: Arc<dyn Transport>) -> Dispatcher {
        Dispatcher::new(
            ClientConfig::new("http://localhost:3000/", "partner", "auth"),
            transport,
        )
    }

    #[test]
    fn build_sets_credentials_and_joins_url() {
        let d = dispatcher(Arc::new(Refused));
        let req = d.build(HttpMethod::Get, "/vcode/abc", None, &[]);
        assert_eq!(req.url, "http://localhost:3000/vcode/abc");
        assert_eq!(req.header(PARTNER_TOKEN_HEADER), Some("partner"));
        assert_eq!(req.header(AUTH_TOKEN_HEADER), Some("auth"));
        assert_eq!(req.headers.len(), 2);
        assert!(req.body.is_none());
    }

    #[test]
    fn extra_headers_are_merged_after_credentials() {
        let d = dispatcher(Arc::new(Refused));
        let req = d.build(
            HttpMethod::Post,
            "/auth/login",
            Some("{}".to_string()),
            &[("Content-Type", CONTENT_TYPE_JSON)],
        );
        assert_eq!(req.headers.len(), 3);
        assert_eq!(req.headers[2].0, "Content-Type");
        assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_JSON));
    }

    #[test]
    fn extra_header_replaces_same_name() {
        let d = dispatcher(Arc::new(Refused));
        let req = d.build(
            HttpMethod::Get,
            "/x",
            None,
            &[("Vplatform-Auth-Token", "override")],
        );
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.header(AUTH_TOKEN_HEADER), Some("override"));
    }

    #[test]
    fn post_json_serializes_body() {
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        let d = dispatcher(recorder.clone());
        d.post_json(
            "/vcode/create",
            &serde_json::json!({"quantity": 2}),
            CONTENT_TYPE_JSON_PATCH,
        )
        .unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert_eq!(seen[0].header("content-type"), Some(CONTENT_TYPE_JSON_PATCH));
        assert_eq!(seen[0].body.as_deref(), Some(r#"{"quantity":2}"#));
    }

    #[test]
    fn transport_failure_is_not_retried() {
        let d = dispatcher(Arc::new(Refused));
        let err = d.dispatch(HttpMethod::Get, "/vcode/abc", None, &[]).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
