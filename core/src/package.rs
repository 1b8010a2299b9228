//! Package creation.

use crate::dispatcher::{Dispatcher, CONTENT_TYPE_JSON_PATCH};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::CreatePackageRequest;

pub const CREATE_PATH: &str = "/package/create";

#[derive(Debug, Clone, Copy)]
pub struct PackageService<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> PackageService<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates a package and returns its public id.
    pub fn create(&self, request: &CreatePackageRequest) -> Result<String> {
        let response = self
            .dispatcher
            .post_json(CREATE_PATH, request, CONTENT_TYPE_JSON_PATCH)?;
        Envelope::from_response(&response)?.into_identifier()
    }
}
