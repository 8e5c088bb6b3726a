/*
 * Responsibility
 * - GET /wopi/files/{id} (CheckFileInfo)
 * - WopiCtx の permission gate で read を確認してから応答を組み立てる
 * - identity 系フィールドは sanitize してから返す
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::wopi::dto::files::CheckFileInfoResponse,
    api::wopi::extractors::{Permission, WopiCtx, WopiUser},
    error::AppError,
    services::convert::to_unix_timestamp,
    services::identity::to_safe_identity,
    services::url_builder::WopiResourceType,
    state::AppState,
};

pub async fn check_file_info(
    State(state): State<AppState>,
    WopiCtx(ctx): WopiCtx,
    WopiUser(principal): WopiUser,
    Path(id): Path<String>,
) -> Result<Json<CheckFileInfoResponse>, AppError> {
    // 認証は済んでいる (WopiUser) ので、許可されていなければ 403
    if !ctx.is_permitted(Permission::Read) {
        return Err(AppError::Forbidden);
    }

    // token は ctx のものへフォールバックさせる
    let file_url = state
        .url_builder
        .url_for_resource(&ctx, WopiResourceType::File, Some(&id), None)?;

    // デモストレージ: 実ファイルのメタデータが無いので version 固定・更新時刻は現在
    let last_modified_time = to_unix_timestamp(chrono::Utc::now().naive_utc());

    Ok(Json(CheckFileInfoResponse {
        base_file_name: format!("{id}.wopitest"),
        owner_id: to_safe_identity(&principal.user_id),
        user_id: to_safe_identity(&principal.user_id),
        user_friendly_name: to_safe_identity(&principal.display_name),
        version: principal.session_id.to_string(),
        last_modified_time,
        user_can_write: ctx.is_permitted(Permission::Update),
        file_url: file_url.into(),
    }))
}
