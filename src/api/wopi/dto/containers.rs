/*
 * Responsibility
 * - CheckContainerInfo response DTO
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckContainerInfoResponse {
    pub name: String,
    pub user_id: String,
    pub user_friendly_name: String,
    pub user_can_create_child_file: bool,
    /// Absolute URL re-addressing this container, token included.
    pub container_url: String,
}
