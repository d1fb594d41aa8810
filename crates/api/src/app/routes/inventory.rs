use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stocktrack_auth::Permission;
use stocktrack_core::RecordId;
use stocktrack_inventory::RecordDraft;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
}

fn write_permission() -> Permission {
    Permission::new("inventory.records.write")
}

pub async fn list_records(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = services.store().list();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": records.len(),
            "records": records.iter().map(dto::record_to_json).collect::<Vec<_>>(),
        })),
    )
        .into_response()
}

pub async fn get_record(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id"),
    };

    match services.store().get(&id) {
        Some(record) => (StatusCode::OK, Json(dto::record_to_json(&record))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "record not found"),
    }
}

pub async fn create_record(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::RecordRequest>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::require_permission(&principal, &write_permission()) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    let record = match RecordDraft::from(body).into_record(RecordId::new()) {
        Ok(record) => record,
        Err(e) => return errors::domain_error_to_response(e),
    };

    services.store().insert(record.clone());
    tracing::info!(record_id = %record.id, "inventory record created");

    (StatusCode::CREATED, Json(dto::record_to_json(&record))).into_response()
}

pub async fn update_record(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::RecordRequest>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::require_permission(&principal, &write_permission()) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id"),
    };

    // Full replacement: every writable field comes from the draft and
    // `sales` is recomputed.
    let record = match RecordDraft::from(body).into_record(id) {
        Ok(record) => record,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if !services.store().update(record.clone()) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "record not found");
    }
    tracing::info!(record_id = %record.id, "inventory record updated");

    (StatusCode::OK, Json(dto::record_to_json(&record))).into_response()
}

pub async fn delete_record(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::require_permission(&principal, &write_permission()) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id"),
    };

    if !services.store().remove(&id) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "record not found");
    }
    tracing::info!(record_id = %id, "inventory record deleted");

    StatusCode::NO_CONTENT.into_response()
}
