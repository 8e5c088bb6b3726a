use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

use super::WopiContext;

/// Handler で WopiContext を受け取るための extractor
/// middleware が WopiContext を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（認証がかかってない・ミドルウェア未設定）
pub struct WopiCtx(pub WopiContext);

impl FromRequestParts<AppState> for WopiCtx
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
            .get::<WopiContext>()
            .cloned()
            .map(WopiCtx)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
