use std::sync::Arc;

use axum::extract::FromRef;

use crate::{infra::config::AppConfig, use_cases::login::LoginUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub login_use_cases: Arc<LoginUseCases>,
}

impl FromRef<AppState> for Arc<LoginUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.login_use_cases.clone()
    }
}
