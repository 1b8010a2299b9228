//! Synchronous client for the vplatform HTTP API.
//!
//! # Overview
//! A `Client` owns one configuration (base URL, partner token, auth token)
//! and one dispatcher. Resource services borrow that dispatcher:
//! `auth()`, `package()`, `action()`, `rule()` and `vcode()`. Each operation
//! serializes its request, sends a single round trip with both credential
//! headers attached, decodes the response envelope and returns the typed
//! `data` it expects.
//!
//! # Design
//! - Every response goes through [`Envelope`]. A non-empty `validationErrors`
//!   list always fails the call, whatever the HTTP status.
//! - Every failure is one [`VPlatformError`] holding an ordered list of causes.
//! - The network sits behind the [`Transport`] trait. [`UreqTransport`] is
//!   the default; tests swap in a recording transport.
//! - No retries, caching or pagination. Configuration is read-only once
//!   built, so a client can be shared across threads.
//!
//! ```no_run
//! use vplatform::{Client, ClientConfig, LoginRequest};
//!
//! # fn main() -> Result<(), vplatform::VPlatformError> {
//! let client = Client::new(ClientConfig::new("https://api.example.com", "partner", "auth"));
//! let token = client.auth().login(&LoginRequest {
//!     username: "user".to_string(),
//!     password: "secret".to_string(),
//! })?;
//! let details = client.vcode().get_details_by_uti("abc123")?;
//! println!("{token}: {} scans", details.total_scans_count);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod auth;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod http;
pub mod package;
pub mod rule;
pub mod transport;
pub mod types;
pub mod vcode;

#[cfg(test)]
mod testing;

pub use action::ActionService;
pub use auth::AuthService;
pub use client::Client;
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use envelope::{Envelope, ValidationError};
pub use error::{ConfigError, ErrorCause, Result, VPlatformError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use package::PackageService;
pub use rule::RuleService;
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{
    Action, AppLinkActionRequest, ContactActionRequest, CreatePackageRequest, CreateVCodeRequest,
    GeoFenceRule, GeoFenceRuleRequest, LatLng, LoginRequest, PolygonModel, RadiusModel, RuleRef,
    TimeRule, TimeRuleRequest, UrlActionRequest, VCodeDetails,
};
pub use vcode::VCodeService;
