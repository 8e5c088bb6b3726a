//! access_token (query) 検証 → WopiContext を extensions に入れる
//!
//! WOPI はクエリの `access_token` で認証する:
//! - token あり + 検証 OK → token と permissions を積んだ WopiContext
//! - token あり + 検証 NG → 401 (warn ログ)
//! - token なし → 匿名 WopiContext (token: None, 何も許可しない)。
//!   401 にするかどうかは handler の permission gate が決める。
//!
//! scheme は X-Forwarded-Proto 優先、無ければ設定の public_scheme。
//! host は Host ヘッダ。どちらもこの場で WopiContext に固定し、
//! 以降は再解決しない。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::wopi::extractors::WopiContext;
use crate::error::AppError;
use crate::state::AppState;

/// `/wopi/*` に認証を掛けるための middleware を適用する。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let scheme = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&state.public_scheme)
        .to_string();

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost")
        .to_string();

    let mut ctx = WopiContext::new(scheme, host);

    if let Some(token) = access_token_from_query(req.uri().query()) {
        match state.security.authenticate(&token).await {
            Some(principal) => {
                ctx.set_token(token);
                for (permission, granted) in &principal.permissions {
                    ctx.set_permission(*permission, *granted);
                }
                req.extensions_mut().insert(principal);
            }
            None => {
                // token の値そのものはログに出さない
                tracing::warn!(path = %req.uri().path(), "access token rejected");
                return Err(AppError::Unauthorized);
            }
        }
    }

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

fn access_token_from_query(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_access_token_param() {
        assert_eq!(
            access_token_from_query(Some("access_token=tok")),
            Some("tok".to_string())
        );
        assert_eq!(
            access_token_from_query(Some("a=1&access_token=tok&b=2")),
            Some("tok".to_string())
        );
    }

    #[test]
    fn decodes_url_encoding() {
        assert_eq!(
            access_token_from_query(Some("access_token=a%26b")),
            Some("a&b".to_string())
        );
    }

    #[test]
    fn missing_param_or_query_is_none() {
        assert_eq!(access_token_from_query(Some("a=1&b=2")), None);
        assert_eq!(access_token_from_query(None), None);
    }
}
