use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{metrics_middleware, request_id_middleware};
use crate::services::Lexicon;
use axum::{middleware::from_fn, routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub lexicon: Arc<Lexicon>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let lexicon = Lexicon::load(&config.lexicon.path).await.map_err(|e| {
            tracing::error!("Failed to load lexicon from {}: {}", config.lexicon.path, e);
            e
        })?;
        tracing::info!(
            words = lexicon.len(),
            path = %lexicon.source(),
            "Lexicon loaded"
        );

        let state = AppState {
            config: config.clone(),
            lexicon: Arc::new(lexicon),
        };

        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/check_word", get(handlers::check_word))
        .route("/scrabble_layout", get(handlers::scrabble_layout))
        .route("/scrabble_board_image", get(handlers::scrabble_board_image))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
