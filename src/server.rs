//! HTTP surface for admin panels, clients and search endpoints.
//!
//! Endpoints:
//!   GET  /health                   Health check
//!   GET  /roles                    List roles with label and color
//!   GET  /roles/:role              Privileges for a role (?reputation=)
//!   GET  /entities                 List editable entity kinds
//!   GET  /entities/:kind/columns   Editable and searchable columns
//!   POST /entities/:kind/filter    Strip a payload to its editable columns

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::columns::{editable_columns, searchable_columns_for, UpdatePayload};
use crate::entity::{validate_entity_kind, EntityKind};
use crate::error::DealgateError;
use crate::privilege::{privileges_for, PrivilegeSet};
use crate::role::{color_for, display_name_for, Role};
use crate::update::{authorize_update_for, AuthorizedUpdate};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthRes {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleInfo {
    pub role: String,
    pub label: String,
    pub color: String,
    pub staff: bool,
    pub admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct PrivilegeQuery {
    pub reputation: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrivilegeRes {
    /// Canonical role, or the raw input when it did not parse.
    pub role: String,
    pub known: bool,
    pub label: String,
    pub color: String,
    pub reputation: f64,
    pub privileges: PrivilegeSet,
    pub mask: u8,
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnsRes {
    pub entity: EntityKind,
    pub editable: Vec<String>,
    pub searchable: Vec<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// Every error a client sees, rendered in the `ApiResponse` envelope.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<DealgateError> for ApiError {
    fn from(e: DealgateError) -> Self {
        let status = match e {
            DealgateError::InvalidEntityKind(_) | DealgateError::UnknownRole(_) => {
                StatusCode::BAD_REQUEST
            }
            DealgateError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, message: e.to_string() }
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        Self { status: r.status(), message: r.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        Self { status: r.status(), message: r.body_text() }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        Self { status: r.status(), message: r.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::err(self.message))).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn role_info(role: Role) -> RoleInfo {
    RoleInfo {
        role: role.as_str().into(),
        label: role.display_name().into(),
        color: role.color().into(),
        staff: role.is_staff(),
        admin: role.is_admin(),
    }
}

async fn health() -> Json<ApiResponse<HealthRes>> {
    Json(ApiResponse::ok(HealthRes {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    }))
}

async fn list_roles() -> Json<ApiResponse<Vec<RoleInfo>>> {
    Json(ApiResponse::ok(Role::ALL.iter().copied().map(role_info).collect()))
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

async fn get_role_privileges(
    raw: Result<Path<String>, PathRejection>,
    q: Result<Query<PrivilegeQuery>, QueryRejection>,
) -> ApiResult<PrivilegeRes> {
    let Path(raw) = raw?;
    let Query(q) = q?;
    let reputation = q.reputation.unwrap_or(0.0);
    let role = Role::parse(&raw);
    // Unknown roles fail closed as guests.
    let privileges = role.map_or(PrivilegeSet::NONE, |r| privileges_for(r, reputation));
    Ok(Json(ApiResponse::ok(PrivilegeRes {
        role: role.map_or(raw, |r| r.as_str().to_string()),
        known: role.is_some(),
        label: display_name_for(role).into(),
        color: color_for(role).into(),
        reputation,
        mask: privileges.to_mask(),
        names: privileges.names().into_iter().map(String::from).collect(),
        privileges,
    })))
}

async fn list_entities() -> Json<ApiResponse<Vec<EntityKind>>> {
    Json(ApiResponse::ok(EntityKind::ALL.to_vec()))
}

async fn get_columns(kind: Result<Path<String>, PathRejection>) -> ApiResult<ColumnsRes> {
    let Path(kind) = kind?;
    let entity = validate_entity_kind(&kind)?;
    Ok(Json(ApiResponse::ok(ColumnsRes {
        entity,
        editable: editable_columns(entity).iter().map(|c| c.to_string()).collect(),
        searchable: searchable_columns_for(entity).into_iter().map(String::from).collect(),
    })))
}

async fn filter_fields(
    kind: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdatePayload>, JsonRejection>,
) -> ApiResult<AuthorizedUpdate> {
    let Path(kind) = kind?;
    let entity = validate_entity_kind(&kind)?;
    let Json(payload) = payload?;
    Ok(Json(ApiResponse::ok(authorize_update_for(entity, payload))))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/roles", get(list_roles))
        .route("/roles/:role", get(get_role_privileges))
        .route("/entities", get(list_entities))
        .route("/entities/:kind/columns", get(get_columns))
        .route("/entities/:kind/filter", post(filter_fields))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
