use std::{net::SocketAddr, sync::Arc};

use env_helpers::get_env_default;
use tgauth_types::SharedSecret;
use url::Url;

use crate::infra::error::InfraError;

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const BOT_USERNAME_VAR: &str = "TELEGRAM_BOT_USERNAME";

pub struct AppConfig {
    /// Bot token the login widget signs with. Required, never logged.
    pub bot_token: Arc<SharedSecret>,
    /// Bot username rendered into the widget's `data-telegram-login`.
    pub bot_username: String,
    /// Public origin the widget redirects back to (`{app_origin}/check_auth`).
    pub app_origin: Url,
    pub bind_addr: SocketAddr,
    /// Set the `Secure` flag on the session cookie. Enable behind HTTPS.
    pub cookie_secure: bool,
    /// Ask the user to allow the bot to message them.
    pub request_write_access: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bot_token = parse_bot_token(std::env::var(BOT_TOKEN_VAR).ok())?;
        let bot_username = std::env::var(BOT_USERNAME_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(InfraError::ConfigMissing {
                var: BOT_USERNAME_VAR,
            })?;

        let app_origin: Url =
            get_env_default("APP_ORIGIN", "http://127.0.0.1:8080".parse().unwrap());
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:8080".parse().unwrap());
        let cookie_secure: bool = get_env_default("COOKIE_SECURE", false);
        let request_write_access: bool = get_env_default("REQUEST_WRITE_ACCESS", true);

        Ok(Self {
            bot_token: Arc::new(bot_token),
            bot_username,
            app_origin,
            bind_addr,
            cookie_secure,
            request_write_access,
        })
    }

    /// Absolute URL of the widget callback, appended under any path
    /// `APP_ORIGIN` carries.
    pub fn auth_url(&self) -> String {
        let mut base = self.app_origin.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("check_auth")
            .map(String::from)
            .unwrap_or_else(|_| format!("{base}check_auth"))
    }
}

fn parse_bot_token(raw: Option<String>) -> Result<SharedSecret, InfraError> {
    let raw = raw.ok_or(InfraError::ConfigMissing { var: BOT_TOKEN_VAR })?;
    SharedSecret::new(raw).map_err(|source| InfraError::ConfigInvalid {
        var: BOT_TOKEN_VAR,
        source,
    })
}
