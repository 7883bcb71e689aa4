use std::net::{Ipv4Addr, SocketAddr};

use crate::{services::rest::endpoints::hello, utils::errors::ServerError, AppState};
use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

pub struct RestServer {
    listener: TcpListener,
    router: Router,
    pub local_port: u16,
}

impl RestServer {
    pub const PORT: u16 = 8080;

    pub async fn new(state: AppState) -> Result<Self, ServerError> {
        Self::bind(
            SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), Self::PORT),
            state,
        )
        .await
    }

    pub async fn bind(address: SocketAddr, state: AppState) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;

        let local_port = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { address, source })?
            .port();

        Ok(RestServer {
            listener,
            router: Self::build_router(state),
            local_port,
        })
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Server starting on port {}", self.local_port());

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("HTTP server error")
    }

    fn build_router(state: AppState) -> Router {
        // The subscriber is capped at INFO, so the layer's DEBUG defaults would be dropped.
        let tracing_layer = TraceLayer::new_for_http()
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO));

        Router::<AppState>::new()
            .merge(hello::get_routes())
            .with_state(state)
            .layer(tracing_layer)
    }
}
