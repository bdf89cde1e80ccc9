use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use usersvc_core::UserId;
use usersvc_store::StoreError;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users().find_all() {
        Ok(users) => (StatusCode::OK, Json(dto::UsersResource { users })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UserFieldsRequest>,
) -> axum::response::Response {
    match services.users().insert(body.into()) {
        Ok(user) => {
            tracing::debug!(id = %user.id, "created user");
            (StatusCode::OK, Json(dto::UserResource { user })).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return errors::invalid_id_response(e),
    };

    match services.users().find_by_id(id) {
        Ok(user) => (StatusCode::OK, Json(dto::UserResource { user })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UserFieldsRequest>,
) -> axum::response::Response {
    let id = match id.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return errors::invalid_id_response(e),
    };

    // The path id wins unconditionally; the body carries fields only.
    match services.users().update_by_id(id, body.into()) {
        Ok(user) => {
            tracing::debug!(id = %user.id, "updated user");
            (StatusCode::OK, Json(dto::UserResource { user })).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return errors::invalid_id_response(e),
    };

    match services.users().delete_by_id(id) {
        Ok(()) => {}
        // Deleting an id that was never there (or already gone) is a
        // no-op; existing clients expect the usual acknowledgment.
        Err(StoreError::NotFound(id)) => {
            tracing::warn!(%id, "delete of missing user, reporting success anyway");
        }
        Err(e) => return errors::store_error_to_response(e),
    }

    (StatusCode::OK, Json(dto::Status::ok())).into_response()
}
