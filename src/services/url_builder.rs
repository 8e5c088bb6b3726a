//! WOPI endpoint addressing.
//!
//! Responsibility:
//! - route 名 → path template の登録テーブル (RouteTable)
//! - WopiResourceType → route 名の対応 (match 1 箇所、網羅性はコンパイラが保証)
//! - 絶対 URL の組み立て: `<scheme>://<host><path-with-id>?access_token=<token>`
//!
//! Notes:
//! - 未登録 route は配線ミス (起動時/テストで気付くべき欠陥) なので、
//!   "見つからない" ではなく misconfiguration として区別したエラーにする。
//! - 生成 URL は token を平文で含む。ログに出さないこと。

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

use crate::api::wopi::extractors::WopiContext;

/// Route name of the file-info endpoint.
pub const CHECK_FILE_INFO: &str = "CheckFileInfo";
/// Route name of the container-info endpoint.
pub const CHECK_CONTAINER_INFO: &str = "CheckContainerInfo";

/// Coarse classification of a WOPI-addressable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WopiResourceType {
    File,
    Container,
}

impl WopiResourceType {
    /// Route name serving this resource kind. Adding a kind is one arm
    /// here; the match keeps the mapping total.
    pub fn route_name(self) -> &'static str {
        match self {
            Self::File => CHECK_FILE_INFO,
            Self::Container => CHECK_CONTAINER_INFO,
        }
    }
}

#[derive(Debug, Error)]
pub enum WopiUrlError {
    /// Caller contract violation: a route name is required.
    #[error("route name must not be empty")]
    EmptyRouteName,

    /// Wiring defect: the named route is not in the table.
    #[error("{name} route not found")]
    RouteNotRegistered { name: String },

    #[error("cannot build base url: {0}")]
    InvalidBase(#[from] url::ParseError),
}

/// Registry of named WOPI routes and their `{id}` path templates.
///
/// Seeded once at startup from the same constants the axum router is built
/// from; the builder only looks names up, it never registers them.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, &'static str>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, path_template: &'static str) {
        self.routes.insert(name, path_template);
    }

    pub fn path_template(&self, name: &str) -> Option<&'static str> {
        self.routes.get(name).copied()
    }
}

/// Builds absolute URLs addressing this host's own WOPI endpoints.
#[derive(Debug, Clone)]
pub struct WopiUrlBuilder {
    table: RouteTable,
}

impl WopiUrlBuilder {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Absolute URL for a named route, with `{id}` filled by `identifier`
    /// (empty when absent) and `access_token` appended to the query.
    ///
    /// The token falls back to the one on `ctx`; an anonymous request
    /// yields an empty `access_token=` value.
    pub fn url_for_route(
        &self,
        ctx: &WopiContext,
        route_name: &str,
        identifier: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Url, WopiUrlError> {
        if route_name.trim().is_empty() {
            return Err(WopiUrlError::EmptyRouteName);
        }

        let template =
            self.table
                .path_template(route_name)
                .ok_or_else(|| WopiUrlError::RouteNotRegistered {
                    name: route_name.to_string(),
                })?;

        let token = access_token.or_else(|| ctx.access_token()).unwrap_or("");
        let path = template.replace("{id}", identifier.unwrap_or(""));

        let mut url = Url::parse(&format!("{}://{}", ctx.scheme(), ctx.host()))?;
        url.set_path(&path);
        url.query_pairs_mut().append_pair("access_token", token);
        Ok(url)
    }

    /// Absolute URL for a resource kind; maps the kind to its route name
    /// and delegates to [`Self::url_for_route`].
    pub fn url_for_resource(
        &self,
        ctx: &WopiContext,
        resource_type: WopiResourceType,
        identifier: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Url, WopiUrlError> {
        self.url_for_route(ctx, resource_type.route_name(), identifier, access_token)
    }
}
