/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - url_builder: 名前付き route から絶対 URL を組み立てる
 *   - security: access token を検証する外部境界
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::api::wopi::route_table;
use crate::config::Config;
use crate::services::security::{DemoSecurityHandler, SecurityHandler};
use crate::services::url_builder::WopiUrlBuilder;

#[derive(Clone)]
pub struct AppState {
    pub url_builder: Arc<WopiUrlBuilder>,
    pub security: Arc<dyn SecurityHandler>,
    /// X-Forwarded-Proto が無いときに外部 URL に使う scheme
    pub public_scheme: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            url_builder: Arc::new(WopiUrlBuilder::new(route_table())),
            security: Arc::new(DemoSecurityHandler::from_config(config)),
            public_scheme: config.public_scheme.clone(),
        }
    }

    #[cfg(test)]
    pub fn for_tests(security: Arc<dyn SecurityHandler>) -> Self {
        Self {
            url_builder: Arc::new(WopiUrlBuilder::new(route_table())),
            security,
            public_scheme: "http".to_string(),
        }
    }
}
