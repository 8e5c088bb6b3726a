use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::services::security::WopiPrincipal;
use crate::state::AppState;

/// Handler で認証済み principal を受け取るための extractor
/// access token middleware が insert 済みである前提、匿名リクエストは 401
pub struct WopiUser(pub WopiPrincipal);

impl FromRequestParts<AppState> for WopiUser
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<WopiPrincipal>()
            .cloned()
            .map(WopiUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
