//! Request and response records for the vplatform API.
//!
//! # Design
//! Field names follow the remote API exactly and are case-sensitive
//! (`publicId`, `inapp_browser`, `organisation`). Response records require
//! their identifying field and default everything else. An unrelated JSON
//! object then fails to decode instead of turning into an empty record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlActionRequest {
    pub url: String,
    #[serde(rename = "inapp_browser")]
    pub in_app_browser: bool,
    #[serde(rename = "publicId")]
    pub public_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppLinkActionRequest {
    pub app_link: String,
    pub ios_link: String,
    pub android_link: String,
    pub public_id: String,
    pub description: String,
}

/// Contact card payload. Coordinates are integers on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactActionRequest {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    #[serde(rename = "organisation")]
    pub organization: String,
    pub position: String,
    pub address: String,
    pub website: String,
    pub image: String,
    pub lat: i64,
    pub lng: i64,
    pub image_profile_public_id: String,
    pub public_id: String,
    pub description: String,
}

/// An action as stored by the server. `data` holds the variant-specific
/// payload (URL, app links, contact fields) as an open map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub public_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub package_usage: u32,
    #[serde(default)]
    pub unassigned_package_usage: u32,
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// Reference to an existing time or location rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleRef {
    pub public_id: String,
}

impl RuleRef {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    pub public_id: String,
    pub description: String,
    pub uti: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub action_public_id: String,
    pub time_rules: Vec<RuleRef>,
    pub location_rules: Vec<RuleRef>,
    pub restricted_emails: String,
    pub platform: String,
    pub single_scan: String,
    /// Unset billing dates are left out of the request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_end_date: Option<DateTime<Utc>>,
    pub max_number_of_scans: u32,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRuleRequest {
    pub start_date: String,
    pub expiry_date: String,
    pub from_hour: u32,
    pub from_minutes: u32,
    pub to_hour: u32,
    pub to_minutes: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRule {
    pub public_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub from_hour: u32,
    #[serde(default)]
    pub from_minutes: u32,
    #[serde(default)]
    pub to_hour: u32,
    #[serde(default)]
    pub to_minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub package_usage: u32,
    #[serde(default)]
    pub unassigned_package_usage: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatLng {
    pub lat: i64,
    pub lng: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RadiusModel {
    #[serde(default)]
    pub location: LatLng,
    #[serde(default)]
    pub radius: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolygonModel {
    #[serde(default)]
    pub points: Vec<LatLng>,
}

/// Geofence payload. `kind` selects which of the two geometries applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeoFenceRuleRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub radius_model: RadiusModel,
    pub polygon_model: PolygonModel,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeoFenceRule {
    pub public_id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub radius_model: RadiusModel,
    #[serde(default)]
    pub polygon_model: PolygonModel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub package_usage: u32,
    #[serde(default)]
    pub unassigned_package_usage: u32,
}

// ---------------------------------------------------------------------------
// VCodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateVCodeRequest {
    pub description: String,
    pub quantity: u32,
}

/// Usage counters and status for one scan code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VCodeDetails {
    pub uti: String,
    #[serde(default)]
    pub total_scans_count: u32,
    #[serde(default)]
    pub unique_scans_count: u32,
    #[serde(default)]
    pub total_opens_count: u32,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_scan_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub active_count: u32,
    #[serde(default)]
    pub not_active_count: u32,
    #[serde(default)]
    pub unassigned_count: u32,
}
