// src/api.rs — Liveness endpoint for the hosting platform
//
// The host keeps a web service alive only while something answers HTTP
// on $PORT. Every GET path returns the same fixed body; there is no
// other surface and no shared state with the bot.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::infra::errors::BotError;

const ALIVE_BODY: &str = "Bot is alive";

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE_BODY)
}

/// Build the liveness router: any GET path answers 200.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(health))
        .fallback_service(get(health))
}

/// Serve the liveness router on `0.0.0.0:<port>`.
pub async fn start_server(port: u16) -> Result<(), BotError> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Liveness listener on http://{addr}");
    axum::serve(listener, build_router()).await?;
    Ok(())
}
