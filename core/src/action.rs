//! Action variants: URL, app link, contact card.

use serde::Serialize;

use crate::dispatcher::{Dispatcher, CONTENT_TYPE_JSON_PATCH};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{Action, AppLinkActionRequest, ContactActionRequest, UrlActionRequest};

pub const URL_PATH: &str = "/action/url";
pub const APP_LINK_PATH: &str = "/action/applink";
pub const CONTACT_PATH: &str = "/action/contact";

#[derive(Debug, Clone, Copy)]
pub struct ActionService<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> ActionService<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn create_url_action(&self, request: &UrlActionRequest) -> Result<Action> {
        self.create(URL_PATH, request)
    }

    pub fn create_app_link_action(&self, request: &AppLinkActionRequest) -> Result<Action> {
        self.create(APP_LINK_PATH, request)
    }

    pub fn create_contact_action(&self, request: &ContactActionRequest) -> Result<Action> {
        self.create(CONTACT_PATH, request)
    }

    fn create<B: Serialize>(&self, path: &str, request: &B) -> Result<Action> {
        let response = self
            .dispatcher
            .post_json(path, request, CONTENT_TYPE_JSON_PATCH)?;
        Envelope::from_response(&response)?.into_record("Action")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_replying;

    const ACTION_REPLY: &str = r#"{
        "data": {
            "publicId": "act-1",
            "description": "landing",
            "type": "url",
            "data": {"url": "https://example.com", "inapp_browser": true},
            "packageUsage": 2,
            "unassignedPackageUsage": 0
        },
        "message": "",
        "validationErrors": []
    }"#;

    #[test]
    fn url_action_round_trip() {
        let (client, transport) = client_replying(200, ACTION_REPLY);
        let request = UrlActionRequest {
            url: "https://example.com".to_string(),
            in_app_browser: true,
            public_id: "act-1".to_string(),
            description: "landing".to_string(),
        };
        let action = client.action().create_url_action(&request).unwrap();
        assert_eq!(action.public_id, "act-1");
        assert_eq!(action.kind, "url");
        assert_eq!(action.data["url"], "https://example.com");
        assert_eq!(action.package_usage, 2);

        let req = transport.last();
        assert_eq!(req.url, "http://vplatform.test/action/url");
        assert_eq!(req.header("content-type"), Some("application/json-patch+json"));
        assert_eq!(transport.last_body()["inapp_browser"], true);
    }

    #[test]
    fn app_link_action_uses_its_path() {
        let (client, transport) = client_replying(200, ACTION_REPLY);
        let request = AppLinkActionRequest {
            app_link: "myapp://open".to_string(),
            ..AppLinkActionRequest::default()
        };
        client.action().create_app_link_action(&request).unwrap();
        assert_eq!(transport.last().url, "http://vplatform.test/action/applink");
        assert_eq!(transport.last_body()["appLink"], "myapp://open");
    }

    #[test]
    fn contact_action_uses_its_path() {
        let (client, transport) = client_replying(200, ACTION_REPLY);
        let request = ContactActionRequest {
            name: "Ada".to_string(),
            lat: 51,
            lng: -1,
            ..ContactActionRequest::default()
        };
        client.action().create_contact_action(&request).unwrap();
        assert_eq!(transport.last().url, "http://vplatform.test/action/contact");
        assert_eq!(
            transport.last().header("content-type"),
            Some("application/json-patch+json")
        );
        assert_eq!(transport.last_body()["lng"], -1);
    }

    #[test]
    fn number_where_record_expected_is_shape_mismatch() {
        let (client, _) = client_replying(200, r#"{"data":42,"validationErrors":[]}"#);
        let err = client
            .action()
            .create_url_action(&UrlActionRequest::default())
            .unwrap_err();
        assert!(err.is_shape_mismatch());
        assert!(err.to_string().starts_with("response.data is not of type Action"));
    }
}
