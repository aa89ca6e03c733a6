//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - `FixedClock`, a clock pinned to a given Unix second
//! - A ready `AppConfig`/`AppState` with a known bot token
//! - Helpers that sign claim sets the way the login widget does

use std::sync::Arc;

use tgauth_types::{ClaimSet, SharedSecret, compute_hash};
use time::OffsetDateTime;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    use_cases::login::{Clock, LoginUseCases},
};

pub const TEST_BOT_TOKEN: &str = "123456:TEST-TOKEN";
pub const TEST_NOW: i64 = 1_700_000_000;

pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    pub fn at(unix: i64) -> Self {
        Self(OffsetDateTime::from_unix_timestamp(unix).expect("valid unix timestamp"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

pub fn test_secret() -> SharedSecret {
    SharedSecret::new(TEST_BOT_TOKEN).unwrap()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bot_token: Arc::new(test_secret()),
        bot_username: "test_bot".to_string(),
        app_origin: "http://127.0.0.1:8080".parse().unwrap(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cookie_secure: false,
        request_write_access: true,
    }
}

pub fn test_app_state(now: i64) -> AppState {
    let config = test_config();
    let login = LoginUseCases::new(config.bot_token.clone(), Arc::new(FixedClock::at(now)));
    AppState {
        config: Arc::new(config),
        login_use_cases: Arc::new(login),
    }
}

/// Claims for "Ann" signed with [`TEST_BOT_TOKEN`].
pub fn signed_claims(auth_date: i64) -> ClaimSet {
    let claims: ClaimSet = [
        ("id", "123".to_string()),
        ("first_name", "Ann".to_string()),
        ("auth_date", auth_date.to_string()),
    ]
    .into_iter()
    .collect();
    resign(claims, |_| {})
}

/// Applies `edit` and recomputes `hash`.
pub fn resign(mut claims: ClaimSet, edit: impl FnOnce(&mut ClaimSet)) -> ClaimSet {
    edit(&mut claims);
    claims.remove("hash");
    let hash = compute_hash(&claims, &test_secret());
    claims.insert("hash", hash);
    claims
}
