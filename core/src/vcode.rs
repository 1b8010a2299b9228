//! Scan codes: creation and lookup by UTI.

use crate::dispatcher::{Dispatcher, CONTENT_TYPE_JSON_PATCH};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::types::{CreateVCodeRequest, VCodeDetails};

pub const CREATE_PATH: &str = "/vcode/create";

#[derive(Debug, Clone, Copy)]
pub struct VCodeService<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> VCodeService<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates scan codes and returns the identifier the server assigns.
    pub fn create(&self, request: &CreateVCodeRequest) -> Result<String> {
        let response = self
            .dispatcher
            .post_json(CREATE_PATH, request, CONTENT_TYPE_JSON_PATCH)?;
        Envelope::from_response(&response)?.into_identifier()
    }

    /// `GET /vcode/{uti}` with no body. The UTI is encoded as a single path segment.
    pub fn get_details_by_uti(&self, uti: &str) -> Result<VCodeDetails> {
        let path = details_path(uti);
        let response = self.dispatcher.dispatch(HttpMethod::Get, &path, None, &[])?;
        Envelope::from_response(&response)?.into_record("VCodeDetails")
    }
}

fn details_path(uti: &str) -> String {
    format!("/vcode/{}", urlencoding::encode(uti))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{AUTH_TOKEN_HEADER, PARTNER_TOKEN_HEADER};
    use crate::testing::{client_replying, AUTH, PARTNER};

    #[test]
    fn create_returns_identifier() {
        let (client, transport) = client_replying(200, r#"{"data":"uti-77","validationErrors":[]}"#);
        let request = CreateVCodeRequest {
            description: "posters".to_string(),
            quantity: 3,
        };
        assert_eq!(client.vcode().create(&request).unwrap(), "uti-77");

        let req = transport.last();
        assert_eq!(req.url, "http://vplatform.test/vcode/create");
        assert_eq!(req.header("content-type"), Some("application/json-patch+json"));
        assert_eq!(
            transport.last_body(),
            serde_json::json!({"description": "posters", "quantity": 3})
        );
    }

    #[test]
    fn get_details_issues_bodyless_get() {
        let (client, transport) = client_replying(
            200,
            r#"{"data":{"uti":"abc123","totalScansCount":10,"uniqueScansCount":4,"status":"active"},"validationErrors":[]}"#,
        );
        let details = client.vcode().get_details_by_uti("abc123").unwrap();
        assert_eq!(details.uti, "abc123");
        assert_eq!(details.total_scans_count, 10);
        assert_eq!(details.status, "active");

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://vplatform.test/vcode/abc123");
        assert!(req.body.is_none());
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.header(PARTNER_TOKEN_HEADER), Some(PARTNER));
        assert_eq!(req.header(AUTH_TOKEN_HEADER), Some(AUTH));
    }

    #[test]
    fn uti_is_encoded_as_one_segment() {
        assert_eq!(details_path("a/b c"), "/vcode/a%2Fb%20c");
    }

    #[test]
    fn get_details_not_found() {
        let (client, _) = client_replying(
            404,
            r#"{"data":null,"validationErrors":[{"field":"uti","message":"not found"}]}"#,
        );
        let err = client.vcode().get_details_by_uti("missing").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "uti: not found");
    }
}
