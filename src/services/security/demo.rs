//! Config-driven security handler for wiring and tests.
//!
//! A single shared token maps to a single principal. 本番はここを
//! 外部の認可サービス実装に差し替える。

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::wopi::extractors::Permission;
use crate::config::Config;

use super::{SecurityHandler, WopiPrincipal};

#[derive(Debug, Clone)]
pub struct DemoSecurityHandler {
    access_token: String,
    session_id: Uuid,
    user_id: String,
    display_name: String,
    readonly: bool,
}

impl DemoSecurityHandler {
    pub fn new(
        access_token: impl Into<String>,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        readonly: bool,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            session_id: Uuid::new_v4(),
            user_id: user_id.into(),
            display_name: display_name.into(),
            readonly,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.demo_access_token,
            &config.demo_user_id,
            &config.demo_user_name,
            config.demo_readonly,
        )
    }
}

#[async_trait]
impl SecurityHandler for DemoSecurityHandler {
    async fn authenticate(&self, access_token: &str) -> Option<WopiPrincipal> {
        if access_token != self.access_token {
            return None;
        }

        let mut permissions = HashMap::new();
        permissions.insert(Permission::Read, true);
        permissions.insert(Permission::Update, !self.readonly);

        Some(WopiPrincipal {
            session_id: self.session_id,
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wrong_token_is_rejected() {
        let handler = DemoSecurityHandler::new("secret", "u1", "User One", false);
        assert!(handler.authenticate("nope").await.is_none());
    }

    #[tokio::test]
    async fn matching_token_grants_read_and_update() {
        let handler = DemoSecurityHandler::new("secret", "u1", "User One", false);
        let principal = handler.authenticate("secret").await.unwrap();
        assert_eq!(principal.user_id, "u1");
        assert_eq!(principal.permissions.get(&Permission::Read), Some(&true));
        assert_eq!(principal.permissions.get(&Permission::Update), Some(&true));
    }

    #[tokio::test]
    async fn readonly_handler_denies_update() {
        let handler = DemoSecurityHandler::new("secret", "u1", "User One", true);
        let principal = handler.authenticate("secret").await.unwrap();
        assert_eq!(principal.permissions.get(&Permission::Read), Some(&true));
        assert_eq!(principal.permissions.get(&Permission::Update), Some(&false));
    }
}
