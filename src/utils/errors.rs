use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors a single request can cause. Each one maps to an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match self {
            RestError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, self.to_string()).into_response()
            }
        }
    }
}

/// Errors raised while bringing the server up. These never reach a client.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind address {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
