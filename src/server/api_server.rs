use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use warp::Filter;
use crate::config::constants::SERVICE_NAME;
use crate::errors::{KodError, KodResult};
use crate::server::app_context::AppContext;
use crate::server::handlers::{
    analyze_handler, delete_all_handler, delete_one_handler, handle_rejection, health_handler,
    history_handler,
};
use crate::structs::config::server_config::ServerConfig;

pub struct ApiServer {
    config: ServerConfig,
    context: AppContext,
}

impl ApiServer {
    pub const fn new(config: ServerConfig, context: AppContext) -> Self {
        Self { config, context }
    }

    pub fn socket_addr(&self) -> KodResult<SocketAddr> {
        (self.config.host.as_str(), self.config.port)
            .to_socket_addrs()
            .map_err(|e| KodError::server_error("resolve address", &e.to_string()))?
            .next()
            .ok_or_else(|| KodError::server_error("resolve address", &format!("no address for {}", self.config.host)))
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> KodResult<()> {
        let addr = self.socket_addr()?;
        let routes = routes(self.context, &self.config);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down server...");
            })
            .map_err(|e| KodError::server_error("bind", &e.to_string()))?;

        log::info!("🌐 {} listening on http://{}", SERVICE_NAME, bound);
        server.await;
        log::info!("✅ Server shutdown complete");

        Ok(())
    }
}

/// Builds the full filter tree: landing page, static assets, health and the JSON API.
pub fn routes(
    context: AppContext,
    config: &ServerConfig,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let static_dir = PathBuf::from(&config.static_dir);

    let index = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(static_dir.join("index.html")));

    let static_files = warp::path("static")
        .and(warp::get())
        .and(warp::fs::dir(static_dir));

    let health = warp::path!("health")
        .and(warp::get())
        .and_then(health_handler);

    let api_routes = api_routes(context, config.max_body_bytes);

    index
        .or(static_files)
        .or(health)
        .or(api_routes)
        .recover(handle_rejection)
        .with(warp::log("kod_gozcusu::http"))
}

fn api_routes(
    context: AppContext,
    max_body_bytes: u64,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let context_filter = warp::any().map(move || context.clone());

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::json())
        .and(context_filter.clone())
        .and_then(analyze_handler);

    let history = warp::path!("api" / "history")
        .and(warp::get())
        .and(context_filter.clone())
        .and_then(history_handler);

    let delete_one = warp::path!("api" / "history" / i64)
        .and(warp::delete())
        .and(context_filter.clone())
        .and_then(delete_one_handler);

    let delete_all = warp::path!("api" / "history")
        .and(warp::delete())
        .and(context_filter)
        .and_then(delete_all_handler);

    analyze
        .or(history)
        .or(delete_one)
        .or(delete_all)
}
