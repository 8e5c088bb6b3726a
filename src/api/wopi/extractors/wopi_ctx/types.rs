//! Request-scoped WOPI capability context.
//!
//! The access-token middleware builds one `WopiContext` per request and puts
//! it into the request extensions. Everything downstream (URL building,
//! permission checks) reads from this value instead of re-resolving ambient
//! state, so capabilities never leak across requests.

use std::collections::HashMap;

/// Capability kinds an authorization step can grant per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Update,
}

/// Per-request view over what the authentication/authorization middleware
/// established: the request's own scheme/host, the negotiated access token
/// and the granted permissions.
///
/// Lifetime is the request. Nothing here is cached or shared.
#[derive(Debug, Clone)]
pub struct WopiContext {
    scheme: String,
    host: String,
    token: Option<String>,
    permissions: HashMap<Permission, bool>,
}

impl WopiContext {
    /// Anonymous context: no token, nothing granted.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            token: None,
            permissions: HashMap::new(),
        }
    }

    /// Scheme of the incoming request ("http" / "https").
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Authority the host is addressed by.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The access token negotiated for this request, `None` for an
    /// anonymous or failed-auth request. Never an error.
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True only when the authorization step stored `permission` with the
    /// value `true`. Absent or `false` means not granted, never an error.
    pub fn is_permitted(&self, permission: Permission) -> bool {
        self.permissions.get(&permission).copied().unwrap_or(false)
    }

    // --- write path, used by the auth middleware only ---

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn set_permission(&mut self, permission: Permission, granted: bool) {
        self.permissions.insert(permission, granted);
    }
}
