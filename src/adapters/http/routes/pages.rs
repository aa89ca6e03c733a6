use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::CookieJar;

use crate::{
    adapters::http::{
        app_state::AppState,
        session::{clear_session, read_session},
        views::{LoginView, WelcomeView, render},
    },
    app_error::AppResult,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_page))
        .route("/health", get(health))
}

/// GET /
/// Greets the user if the session cookie still verifies, otherwise sends them to /login.
async fn index(State(app_state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    if let Some(claims) = read_session(&jar)
        && let Ok(claims) = app_state.login_use_cases.check_session(&claims)
    {
        let view = WelcomeView {
            first_name: claims.first_name().unwrap_or("friend").to_string(),
            username: claims.username().map(str::to_string),
        };
        return Ok(render(&view)?.into_response());
    }

    // Drop a stale or forged cookie so the browser stops sending it.
    Ok((clear_session(jar), Redirect::to("/login")).into_response())
}

async fn login_page(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = &app_state.config;
    render(&LoginView {
        bot_username: config.bot_username.clone(),
        auth_url: config.auth_url(),
        request_write_access: config.request_write_access,
    })
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        adapters::http::session::{SESSION_COOKIE, session_cookie},
        infra::app::create_app,
        test_utils::{TEST_NOW, resign, signed_claims, test_app_state},
    };

    fn server() -> TestServer {
        TestServer::new(create_app(test_app_state(TEST_NOW))).unwrap()
    }

    #[tokio::test]
    async fn index_without_session_redirects_to_login() {
        let response = server().get("/").await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }

    #[tokio::test]
    async fn index_with_valid_session_greets_user() {
        let claims = resign(signed_claims(TEST_NOW - 3600), |c| {
            c.insert("username", "ann_t");
        });

        let response = server()
            .get("/")
            .add_cookie(session_cookie(&claims, false).unwrap())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.text();
        assert!(body.contains("Welcome, Ann"));
        assert!(body.contains("@ann_t"));
        assert_eq!(response.header("x-frame-options"), "DENY");
    }

    #[tokio::test]
    async fn index_with_expired_session_redirects_and_clears() {
        let claims = signed_claims(TEST_NOW - 90_000);

        let response = server()
            .get("/")
            .add_cookie(session_cookie(&claims, false).unwrap())
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
        assert_eq!(response.cookie(SESSION_COOKIE).value(), "");
    }

    #[tokio::test]
    async fn index_with_tampered_session_redirects() {
        let mut claims = signed_claims(TEST_NOW - 60);
        claims.insert("first_name", "Mallory");

        let response = server()
            .get("/")
            .add_cookie(session_cookie(&claims, false).unwrap())
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn login_page_renders_widget() {
        let response = server().get("/login").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.text();
        assert!(body.contains("telegram-widget.js"));
        assert!(body.contains(r#"data-telegram-login="test_bot""#));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = server().get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "ok");
    }
}
