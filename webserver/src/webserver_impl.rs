//! Main webserver implementation
//!
//! `WebServer` owns the fleet and exposes it over HTTP. It is generic over
//! the storage ports so the router can be driven in-process against the
//! in-memory stores or mocks.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use fleet::{Fleet, ItemStore, MissionLogStore, MoverStore};
use shared::logging;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{health, items, missions, movers};

const SERVICE: &str = "webserver";

/// HTTP boundary of the fleet
pub struct WebServer<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    pub(crate) fleet: Arc<Fleet<M, I, L>>,
    pub(crate) state: Arc<WebServerState>,
}

impl<M, I, L> Clone for WebServer<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    fn clone(&self) -> Self {
        Self {
            fleet: Arc::clone(&self.fleet),
            state: Arc::clone(&self.state),
        }
    }
}

impl<M, I, L> WebServer<M, I, L>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    pub fn new(bind_address: SocketAddr, fleet: Fleet<M, I, L>) -> Self {
        Self {
            fleet: Arc::new(fleet),
            state: Arc::new(WebServerState::new(bind_address)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Mover administration
            .route(
                "/api/movers",
                get(movers::list_movers::<M, I, L>).post(movers::create_mover::<M, I, L>),
            )
            .route(
                "/api/movers/:id",
                get(movers::get_mover::<M, I, L>)
                    .put(movers::update_mover::<M, I, L>)
                    .delete(movers::delete_mover::<M, I, L>),
            )
            // Item catalog
            .route(
                "/api/items",
                get(items::list_items::<M, I, L>).post(items::create_item::<M, I, L>),
            )
            .route(
                "/api/items/:id",
                get(items::get_item::<M, I, L>)
                    .put(items::update_item::<M, I, L>)
                    .delete(items::delete_item::<M, I, L>),
            )
            // Mission lifecycle
            .route("/api/missions/load", axum::routing::post(missions::load::<M, I, L>))
            .route("/api/missions/start", axum::routing::post(missions::start::<M, I, L>))
            .route("/api/missions/end", axum::routing::post(missions::end::<M, I, L>))
            .route("/api/missions/mostActive", get(missions::most_active::<M, I, L>))
            .route("/api/missions/log", get(missions::log::<M, I, L>))
            // Health check
            .route("/health", get(health::health_check::<M, I, L>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_address = self.state.bind_address;
        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e))
            })?;

        logging::log_startup(SERVICE, &format!("HTTP server on http://{}", bind_address));

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }

    pub fn fleet(&self) -> &Fleet<M, I, L> {
        &self.fleet
    }

    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}
