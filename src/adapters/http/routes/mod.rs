pub mod auth;
pub mod pages;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(auth::router()).merge(pages::router())
}
