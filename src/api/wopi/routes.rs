/*
 * Responsibility
 * - WOPI の URL 構造を定義 (名前付き route ↔ path template)
 * - Router と RouteTable を同じ定数から組み立てる (二重管理しない)
 */
use axum::{Router, routing::get};

use crate::services::url_builder::{CHECK_CONTAINER_INFO, CHECK_FILE_INFO, RouteTable};
use crate::state::AppState;

use crate::api::wopi::handlers::{containers::check_container_info, files::check_file_info};

pub const FILES_PATH: &str = "/wopi/files/{id}";
pub const CONTAINERS_PATH: &str = "/wopi/containers/{id}";

/// access token middleware を掛ける対象の router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(FILES_PATH, get(check_file_info))
        .route(CONTAINERS_PATH, get(check_container_info))
}

/// Lookup table the URL builder consumes. Registered once at startup.
pub fn route_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.register(CHECK_FILE_INFO, FILES_PATH);
    table.register(CHECK_CONTAINER_INFO, CONTAINERS_PATH);
    table
}
