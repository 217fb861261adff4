use axum::{routing::get, Router};

pub const KEEP_ALIVE_MESSAGE: &str = "Void Assistant is running!";

/// Keep-alive routes polled by the host's uptime monitor.
pub fn router() -> Router {
    Router::new().route("/", get(home))
}

async fn home() -> &'static str {
    KEEP_ALIVE_MESSAGE
}
