use axum::{
    Router,
    routing::{get, post},
};
use common::{GameRules, log};
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};

use crate::server_config::ServerConfig;
use crate::tile_handlers;

/// Shared by every request. Read-only: boards travel with the requests, never in here.
#[derive(Clone)]
pub struct WebServerState {
    pub rules: GameRules,
}

pub fn build_router(config: &ServerConfig) -> Router {
    let state = WebServerState {
        rules: config.rules,
    };

    let app = Router::new()
        .route("/ping", get(tile_handlers::ping))
        .route("/blackWhiteTile/initialize", post(tile_handlers::initialize))
        .route("/blackWhiteTile/handleClick", post(tile_handlers::handle_click))
        .with_state(state);

    if config.permissive_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

pub async fn run_web_server(
    config: ServerConfig,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(&config.address).await?;
    log!("Black/white tiles server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
