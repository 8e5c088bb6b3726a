/*
 * Responsibility
 * - GET /wopi/containers/{id} (CheckContainerInfo)
 * - files と同じ permission gate / sanitize 方針
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::wopi::dto::containers::CheckContainerInfoResponse,
    api::wopi::extractors::{Permission, WopiCtx, WopiUser},
    error::AppError,
    services::identity::to_safe_identity,
    services::url_builder::WopiResourceType,
    state::AppState,
};

pub async fn check_container_info(
    State(state): State<AppState>,
    WopiCtx(ctx): WopiCtx,
    WopiUser(principal): WopiUser,
    Path(id): Path<String>,
) -> Result<Json<CheckContainerInfoResponse>, AppError> {
    if !ctx.is_permitted(Permission::Read) {
        return Err(AppError::Forbidden);
    }

    let container_url =
        state
            .url_builder
            .url_for_resource(&ctx, WopiResourceType::Container, Some(&id), None)?;

    Ok(Json(CheckContainerInfoResponse {
        name: id,
        user_id: to_safe_identity(&principal.user_id),
        user_friendly_name: to_safe_identity(&principal.display_name),
        user_can_create_child_file: ctx.is_permitted(Permission::Update),
        container_url: container_url.into(),
    }))
}
