/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (access token / HTTP 共通層)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, state::AppState};

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.app_env.is_production() && config.public_scheme != "https" {
        tracing::warn!("production deployment with PUBLIC_SCHEME=http; generated URLs carry tokens in cleartext");
    }
    let state = AppState::new(&config);

    let app = build_router(state);

    tracing::info!(addr = %config.addr, "wopi host listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    // /health だけは token なしで通す
    let wopi = middleware::auth::access::apply(api::wopi::routes(), state.clone());

    let app = Router::new()
        .route("/health", get(api::wopi::handlers::health::health))
        .merge(wopi)
        .with_state(state);

    middleware::http::apply(app)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::services::security::DemoSecurityHandler;
    use crate::state::AppState;

    use super::build_router;

    fn router() -> axum::Router {
        let security = DemoSecurityHandler::new("tok", "user<1>", "Demo/User", false);
        build_router(AppState::for_tests(Arc::new(security)))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("host", "wopi.example.com")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let res = router().oneshot(get("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn check_file_info_with_valid_token() {
        let res = router()
            .oneshot(get("/wopi/files/abc?access_token=tok"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body["FileUrl"],
            "http://wopi.example.com/wopi/files/abc?access_token=tok"
        );
        // identity フィールドは sanitize される
        assert_eq!(body["UserId"], "user_1_");
        assert_eq!(body["UserFriendlyName"], "Demo_User");
        assert_eq!(body["UserCanWrite"], true);
    }

    #[tokio::test]
    async fn check_container_info_with_valid_token() {
        let res = router()
            .oneshot(get("/wopi/containers/root?access_token=tok"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["ContainerUrl"],
            "http://wopi.example.com/wopi/containers/root?access_token=tok"
        );
    }

    #[tokio::test]
    async fn invalid_token_is_401() {
        let res = router()
            .oneshot(get("/wopi/files/abc?access_token=wrong"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn anonymous_request_is_401() {
        let res = router().oneshot(get("/wopi/files/abc")).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn forwarded_proto_sets_the_url_scheme() {
        let req = Request::builder()
            .uri("/wopi/files/abc?access_token=tok")
            .header("host", "wopi.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let res = router().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["FileUrl"],
            "https://wopi.example.com/wopi/files/abc?access_token=tok"
        );
    }
}
