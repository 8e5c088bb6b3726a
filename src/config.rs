/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, PUBLIC_SCHEME, デモ用トークンなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,

    /// リバースプロキシの背後で外部 URL に使う scheme ("http" / "https")
    /// X-Forwarded-Proto が来ていればそちらを優先する
    pub public_scheme: String,

    pub demo_access_token: String,
    pub demo_user_id: String,
    pub demo_user_name: String,
    pub demo_readonly: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let public_scheme = std::env::var("PUBLIC_SCHEME")
            .unwrap_or_else(|_| "http".to_string())
            .to_ascii_lowercase();
        if public_scheme != "http" && public_scheme != "https" {
            return Err(ConfigError::Invalid("PUBLIC_SCHEME"));
        }

        let demo_access_token = std::env::var("WOPI_DEMO_ACCESS_TOKEN")
            .map_err(|_| ConfigError::Missing("WOPI_DEMO_ACCESS_TOKEN"))?;
        if demo_access_token.trim().is_empty() {
            return Err(ConfigError::Invalid("WOPI_DEMO_ACCESS_TOKEN"));
        }

        let demo_user_id =
            std::env::var("WOPI_DEMO_USER_ID").unwrap_or_else(|_| "demo-user".to_string());

        let demo_user_name =
            std::env::var("WOPI_DEMO_USER_NAME").unwrap_or_else(|_| "Demo User".to_string());

        let demo_readonly = std::env::var("WOPI_DEMO_READONLY")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            addr,
            app_env,
            public_scheme,
            demo_access_token,
            demo_user_id,
            demo_user_name,
            demo_readonly,
        })
    }
}
