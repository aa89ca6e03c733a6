use askama::Template;
use axum::response::Html;

use crate::app_error::{AppError, AppResult};

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html><head><title>Sign in</title></head>
<body>
<h1>Hello, anonymous!</h1>
<script async src="https://telegram.org/js/telegram-widget.js?22" data-telegram-login="{{ bot_username }}" data-size="large" data-auth-url="{{ auth_url }}"{% if request_write_access %} data-request-access="write"{% endif %}></script>
</body></html>"#
)]
pub struct LoginView {
    pub bot_username: String,
    pub auth_url: String,
    pub request_write_access: bool,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html><head><title>Welcome</title></head>
<body>
<h1>Welcome, {{ first_name }}</h1>
{% if let Some(username) = username %}<p>@{{ username }}</p>{% endif %}
<form method="post" action="/logout"><button type="submit">Log out</button></form>
</body></html>"#
)]
pub struct WelcomeView {
    pub first_name: String,
    pub username: Option<String>,
}

pub fn render<T: Template>(view: &T) -> AppResult<Html<String>> {
    view.render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {e}")))
}
