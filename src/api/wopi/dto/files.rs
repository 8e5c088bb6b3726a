/*
 * Responsibility
 * - CheckFileInfo response DTO
 * - WOPI のフィールド名は PascalCase (serde rename)
 * - UserId / UserFriendlyName は handler 側で sanitize 済みの値を入れる
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckFileInfoResponse {
    pub base_file_name: String,
    pub owner_id: String,
    pub user_id: String,
    pub user_friendly_name: String,
    pub version: String,
    pub last_modified_time: i64,
    pub user_can_write: bool,
    /// Absolute URL re-addressing this file, token included.
    pub file_url: String,
}
