use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::Filter;
use crate::config::constants::{
    sleep_duration_millis, MAX_REQUEST_BODY_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS,
};
use crate::errors::{ProxyError, ProxyResult};
use crate::services::report_handler::ReportHandler;
use crate::structs::config::server_config::ServerConfig;

pub struct ReportServer {
    handler: Arc<ReportHandler>,
    config: ServerConfig,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReportServer {
    pub fn new(handler: Arc<ReportHandler>, config: ServerConfig) -> Self {
        Self {
            handler,
            config,
            addr: None,
            shutdown_tx: None,
        }
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Binds and spawns the server, returning the bound address (useful
    /// with port 0).
    pub async fn start(&mut self) -> ProxyResult<SocketAddr> {
        let addr = self.config.socket_addr().map_err(|e| {
            ProxyError::config_error(&format!("invalid host '{}': {}", self.config.host, e), Some("server.host"))
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = create_routes(Arc::clone(&self.handler), &self.config);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ProxyError::config_error(&format!("failed to bind {}: {}", addr, e), Some("server.port")))?;

        tokio::spawn(server);
        self.addr = Some(bound);

        log::info!(
            "🌐 Report server ({}) listening on http://{}/api/{}",
            self.handler.descriptor().name,
            bound,
            self.config.route.trim_matches('/')
        );
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> ProxyResult<()> {
        log::info!("🛑 Shutting down report server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ProxyError::config_error("Failed to send shutdown signal", None)
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Report server shutdown complete");

        Ok(())
    }
}

/// `/api/<route>` and `/` accept POST behind CORS and a body limit. Every
/// other method skips both and gets the handler's 405.
pub fn create_routes(
    handler: Arc<ReportHandler>,
    config: &ServerConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let handler_filter = warp::any().map(move || Arc::clone(&handler));

    let endpoint = warp::path("api")
        .and(warp::path(config.route.trim_matches('/').to_string()))
        .and(warp::path::end())
        .or(warp::path::end())
        .unify();

    let cors = if config.allowed_origins.is_empty() {
        warp::cors().allow_any_origin()
    } else {
        warp::cors().allow_origins(config.allowed_origins.iter().map(|origin| origin.as_str()))
    }
    .allow_headers(vec!["content-type"])
    .allow_methods(vec!["POST"]);

    let report = endpoint
        .clone()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::bytes())
        .and(handler_filter.clone())
        .and_then(report_endpoint)
        .with(cors);

    let other_methods = endpoint
        .and(warp::method().and_then(non_post_method))
        .and(handler_filter)
        .and_then(method_endpoint);

    report
        .or(other_methods)
        .recover(handle_rejection)
}

async fn non_post_method(method: Method) -> Result<Method, warp::Rejection> {
    if method == Method::POST {
        Err(warp::reject::not_found())
    } else {
        Ok(method)
    }
}

async fn report_endpoint(body: Bytes, handler: Arc<ReportHandler>) -> Result<impl warp::Reply, Infallible> {
    let response = handler.handle(&Method::POST, &body).await;
    Ok(warp::reply::with_status(warp::reply::json(&response.body), response.status))
}

async fn method_endpoint(method: Method, handler: Arc<ReportHandler>) -> Result<impl warp::Reply, Infallible> {
    let response = handler.handle(&method, &[]).await;
    Ok(warp::reply::with_status(warp::reply::json(&response.body), response.status))
}

async fn handle_rejection(rejection: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found")
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Length Required")
    } else if rejection.find::<warp::filters::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "Origin Not Allowed")
    } else {
        log::warn!("Unhandled rejection: {:?}", rejection);
        (StatusCode::BAD_REQUEST, "Bad Request")
    };

    Ok(warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status))
}
