//! HTTP server hosting the GraphQL endpoint.
//!
//! Routes:
//!
//! - `POST /query`: GraphQL over HTTP (JSON body `{query, variables, operationName}`)
//! - `GET /health`: liveness check returning `OK`
//!
//! Every request is traced, CORS is open for browser clients, and a panic in
//! a handler is turned into a 500 carrying a GraphQL-shaped error body.

use crate::db::db::Db;
use crate::graphql::error::CODE_INTERNAL;
use crate::graphql::{build_schema, TaskSchema};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_error, msg_info};
use async_graphql_axum::GraphQL;
use axum::body::Body;
use axum::http::{header, Method, Response, StatusCode};
use axum::routing::{get, post_service};
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Builds the application router around an executable schema.
pub fn create_router(schema: TaskSchema) -> Router {
    let routes = Router::new()
        .route("/query", post_service(GraphQL::new(schema)))
        .route("/health", get(health_check_handler));

    with_middleware(routes)
}

/// Wraps `routes` in panic recovery, request tracing and CORS.
pub fn with_middleware(routes: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    msg_error!(Message::BackgroundTaskFailed(details.to_string()));

    let body = serde_json::json!({
        "data": null,
        "errors": [{
            "message": Message::InternalServerError.to_string(),
            "extensions": { "code": CODE_INTERNAL },
        }],
    });

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// Opens the database, builds the schema and serves until Ctrl+C.
#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: &Config) -> anyhow::Result<()> {
    let db = Db::open(config.database_path()?)?;
    let service = TaskService::new(db)?;
    let app = create_router(build_schema(service));

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    msg_info!(Message::ServerStarting(address));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        msg_error!(Message::ShutdownSignalFailed(err.to_string()));
        std::future::pending::<()>().await;
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Calling this
/// twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
