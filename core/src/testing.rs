//! In-memory transport for unit tests: records requests, replays one canned response.

use std::sync::{Arc, Mutex};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};

pub(crate) const PARTNER: &str = "partner-1";
pub(crate) const AUTH: &str = "auth-1";

pub(crate) struct Scripted {
    status: u16,
    body: String,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Scripted {
    pub(crate) fn last(&self) -> HttpRequest {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub(crate) fn last_body(&self) -> serde_json::Value {
        serde_json::from_str(self.last().body.as_deref().expect("request had no body")).unwrap()
    }
}

impl Transport for Scripted {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

/// A client whose every request gets `status` and `body` back.
pub(crate) fn client_replying(status: u16, body: &str) -> (Client, Arc<Scripted>) {
    let transport = Arc::new(Scripted {
        status,
        body: body.to_string(),
        seen: Mutex::new(Vec::new()),
    });
    let client = Client::with_transport(
        ClientConfig::new("http://vplatform.test", PARTNER, AUTH),
        transport.clone(),
    );
    (client, transport)
}
