use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const PARTNER_TOKEN_HEADER: &str = "vplatform-partner-token";
pub const AUTH_TOKEN_HEADER: &str = "vplatform-auth-token";

/// Header values every request must carry.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub partner_token: String,
    pub auth_token: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            partner_token: "test-partner".to_string(),
            auth_token: "test-auth".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Response wrapper, mirroring the real service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub data: Value,
    pub message: String,
    pub validation_errors: Vec<FieldError>,
    pub stack_trace: String,
}

type Reply = (StatusCode, Json<Envelope>);

fn ok(data: Value) -> Reply {
    (
        StatusCode::OK,
        Json(Envelope {
            data,
            ..Envelope::default()
        }),
    )
}

fn rejected(status: StatusCode, errors: Vec<FieldError>) -> Reply {
    (
        status,
        Json(Envelope {
            data: Value::Null,
            message: "validation failed".to_string(),
            validation_errors: errors,
            stack_trace: String::new(),
        }),
    )
}

#[derive(Clone)]
struct AppState {
    credentials: Arc<Credentials>,
    vcodes: Arc<RwLock<HashMap<String, Value>>>,
}

pub fn app(credentials: Credentials) -> Router {
    let state = AppState {
        credentials: Arc::new(credentials),
        vcodes: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/auth/login", post(login))
        .route("/package/create", post(create_package))
        .route("/action/url", post(create_url_action))
        .route("/action/applink", post(create_app_link_action))
        .route("/action/contact", post(create_contact_action))
        .route("/rules/time/create", post(create_rule))
        .route("/vcode/create", post(create_vcode))
        .route("/vcode/{uti}", get(get_vcode))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_credentials,
        ))
        .with_state(state)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app(credentials)).await
}

async fn require_credentials(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!(method = %request.method(), path = %request.uri().path(), "request");
    if !has_credentials(request.headers(), &state.credentials) {
        tracing::warn!(path = %request.uri().path(), "rejected: bad credentials");
        let envelope = Envelope {
            message: "unauthorized".to_string(),
            ..Envelope::default()
        };
        return (StatusCode::UNAUTHORIZED, Json(envelope)).into_response();
    }
    next.run(request).await
}

fn has_credentials(headers: &HeaderMap, credentials: &Credentials) -> bool {
    let matches = |name: &str, expected: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == expected)
    };
    matches(PARTNER_TOKEN_HEADER, &credentials.partner_token)
        && matches(AUTH_TOKEN_HEADER, &credentials.auth_token)
}

/// Collects a "required" error for each listed field that is missing or an empty string.
fn require(body: &Value, fields: &[&str]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|field| {
            body.get(**field)
                .and_then(Value::as_str)
                .map_or(true, str::is_empty)
        })
        .map(|field| FieldError::new(field, "required"))
        .collect()
}

fn with_public_id(body: &Value) -> String {
    body.get("publicId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string)
}

/// Echoes a rule body back as a stored record.
fn rule_record(body: Value) -> Value {
    let public_id = with_public_id(&body);
    let mut record = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    record.insert("publicId".to_string(), json!(public_id));
    record.insert("packageUsage".to_string(), json!(0));
    record.insert("unassignedPackageUsage".to_string(), json!(0));
    Value::Object(record)
}

/// Wraps an action body as `{publicId, description, type, data}`.
fn action_record(kind: &str, body: Value) -> Value {
    let public_id = with_public_id(&body);
    let mut data = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    data.remove("publicId");
    let description = data.remove("description").unwrap_or(json!(""));
    json!({
        "publicId": public_id,
        "description": description,
        "type": kind,
        "data": data,
        "packageUsage": 0,
        "unassignedPackageUsage": 0,
    })
}

async fn login(Json(body): Json<Value>) -> Reply {
    let errors = require(&body, &["username", "password"]);
    if !errors.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, errors);
    }
    ok(json!(format!("token-{}", Uuid::new_v4().simple())))
}

async fn create_package(Json(body): Json<Value>) -> Reply {
    let errors = require(&body, &["title"]);
    if !errors.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, errors);
    }
    let public_id = with_public_id(&body);
    tracing::info!(public_id = %public_id, "package created");
    ok(json!(public_id))
}

async fn create_url_action(Json(body): Json<Value>) -> Reply {
    create_action("url", "url", body)
}

async fn create_app_link_action(Json(body): Json<Value>) -> Reply {
    create_action("applink", "appLink", body)
}

async fn create_contact_action(Json(body): Json<Value>) -> Reply {
    create_action("contact", "name", body)
}

fn create_action(kind: &str, required_field: &str, body: Value) -> Reply {
    let errors = require(&body, &[required_field]);
    if !errors.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, errors);
    }
    ok(action_record(kind, body))
}

/// Time rules and geofences share this route; a `type` key marks a geofence.
async fn create_rule(Json(body): Json<Value>) -> Reply {
    let required = if body.get("type").is_some() {
        "type"
    } else {
        "startDate"
    };
    let errors = require(&body, &[required]);
    if !errors.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, errors);
    }
    ok(rule_record(body))
}

async fn create_vcode(State(state): State<AppState>, Json(body): Json<Value>) -> Reply {
    let quantity = body.get("quantity").and_then(Value::as_u64).unwrap_or(0);
    if quantity == 0 {
        return rejected(
            StatusCode::BAD_REQUEST,
            vec![FieldError::new("quantity", "must be greater than 0")],
        );
    }

    let uti = Uuid::new_v4().simple().to_string();
    let details = json!({
        "uti": uti,
        "description": body.get("description").cloned().unwrap_or(json!("")),
        "totalScansCount": 0,
        "uniqueScansCount": 0,
        "totalOpensCount": 0,
        "isPublic": false,
        "status": "active",
        "activeCount": quantity,
        "notActiveCount": 0,
        "unassignedCount": quantity,
    });
    state.vcodes.write().await.insert(uti.clone(), details);
    tracing::info!(uti = %uti, quantity, "vcode created");
    ok(json!(uti))
}

async fn get_vcode(State(state): State<AppState>, Path(uti): Path<String>) -> Reply {
    let vcodes = state.vcodes.read().await;
    match vcodes.get(&uti) {
        Some(details) => ok(details.clone()),
        None => rejected(
            StatusCode::NOT_FOUND,
            vec![FieldError::new("uti", "not found")],
        ),
    }
}
