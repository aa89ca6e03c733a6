//! Widget callback and logout.

use axum::{
    Form, Router,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::CookieJar;

use crate::{
    adapters::http::{
        app_state::AppState,
        session::{clear_session, session_cookie},
    },
    app_error::{AppError, AppResult},
};

type Pairs = Vec<(String, String)>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check_auth", get(check_auth_query).post(check_auth_form))
        .route("/logout", get(logout).post(logout))
}

/// GET /check_auth?id=..&first_name=..&auth_date=..&hash=..
/// The widget redirects here with the signed fields in the query string.
async fn check_auth_query(
    State(app_state): State<AppState>,
    jar: CookieJar,
    query: Result<Query<Pairs>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    complete_login(&app_state, jar, pairs)
}

/// POST /check_auth with the same fields urlencoded in the body.
async fn check_auth_form(
    State(app_state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<Pairs>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(pairs) = form.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    complete_login(&app_state, jar, pairs)
}

fn complete_login(
    app_state: &AppState,
    jar: CookieJar,
    pairs: Pairs,
) -> AppResult<(CookieJar, Redirect)> {
    let claims = app_state.login_use_cases.check_widget_login(pairs)?;
    let cookie = session_cookie(&claims, app_state.config.cookie_secure)?;
    Ok((jar.add(cookie), Redirect::to("/")))
}

async fn logout(jar: CookieJar) -> impl IntoResponse {
    (clear_session(jar), Redirect::to("/login"))
}
