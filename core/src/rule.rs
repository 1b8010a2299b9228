//! Time rules and geofence rules.

use crate::dispatcher::{Dispatcher, CONTENT_TYPE_JSON, CONTENT_TYPE_JSON_PATCH};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{GeoFenceRule, GeoFenceRuleRequest, TimeRule, TimeRuleRequest};

pub const TIME_RULE_PATH: &str = "/rules/time/create";
// Geofences are created through the time-rule endpoint on the upstream API.
pub const GEOFENCE_RULE_PATH: &str = "/rules/time/create";

#[derive(Debug, Clone, Copy)]
pub struct RuleService<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> RuleService<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn create_time_rule(&self, request: &TimeRuleRequest) -> Result<TimeRule> {
        let response = self
            .dispatcher
            .post_json(TIME_RULE_PATH, request, CONTENT_TYPE_JSON)?;
        Envelope::from_response(&response)?.into_record("TimeRule")
    }

    pub fn create_geofence_rule(&self, request: &GeoFenceRuleRequest) -> Result<GeoFenceRule> {
        let response = self
            .dispatcher
            .post_json(GEOFENCE_RULE_PATH, request, CONTENT_TYPE_JSON_PATCH)?;
        Envelope::from_response(&response)?.into_record("GeoFenceRule")
    }
}
