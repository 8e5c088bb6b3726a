/*!
 * Security handler boundary
 *
 * Responsibility:
 * - "この opaque token は誰で、何が許可されているか" を外部コラボレータに問う境界
 * - token の発行・検証方式 (JWT 等) はこの trait の向こう側に閉じ込める
 *
 * Public API:
 * - SecurityHandler
 * - WopiPrincipal
 * - DemoSecurityHandler
 */

mod demo;

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::wopi::extractors::Permission;

pub use demo::DemoSecurityHandler;

/// Authenticated caller as the authorization step resolved it.
#[derive(Debug, Clone)]
pub struct WopiPrincipal {
    /// Stable id of the session the token belongs to.
    pub session_id: Uuid,
    pub user_id: String,
    pub display_name: String,
    /// Capabilities granted for this request.
    pub permissions: HashMap<Permission, bool>,
}

/// Boundary to the external authentication/authorization collaborator.
///
/// The only operation this host calls: authenticate the opaque access token
/// and get back the principal plus granted permissions. `None` means the
/// token is not valid; that is a normal outcome, not an error.
#[async_trait]
pub trait SecurityHandler: Send + Sync {
    async fn authenticate(&self, access_token: &str) -> Option<WopiPrincipal>;
}
