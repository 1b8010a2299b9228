//! Entry point owning the configuration and the dispatcher shared by every service.
//!
//! # Design
//! `Client` holds immutable configuration and a transport, and nothing else.
//! Service handles (`auth()`, `package()`, ...) are cheap borrows of the same
//! dispatcher, so one client can be shared across threads behind an `Arc` and
//! used concurrently without locking.

use std::sync::Arc;

use crate::action::ActionService;
use crate::auth::AuthService;
use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::error::ConfigError;
use crate::package::PackageService;
use crate::rule::RuleService;
use crate::transport::{Transport, UreqTransport};
use crate::vcode::VCodeService;

/// Synchronous client for the vplatform API.
#[derive(Debug, Clone)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Client over the blocking `ureq` transport, honoring `config.timeout`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.timeout));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        tracing::debug!(base_url = %config.base_url, "creating vplatform client");
        Self {
            dispatcher: Dispatcher::new(config, transport),
        }
    }

    /// See [`ClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.dispatcher)
    }

    pub fn package(&self) -> PackageService<'_> {
        PackageService::new(&self.dispatcher)
    }

    pub fn action(&self) -> ActionService<'_> {
        ActionService::new(&self.dispatcher)
    }

    pub fn rule(&self) -> RuleService<'_> {
        RuleService::new(&self.dispatcher)
    }

    pub fn vcode(&self) -> VCodeService<'_> {
        VCodeService::new(&self.dispatcher)
    }
}
