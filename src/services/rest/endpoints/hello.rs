use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

use crate::{
    services::rest::payloads::hello::Message, utils::errors::RestError, AppState,
};

pub const GREETING: &str = "Hello IT-Tage!";

pub fn get_routes() -> Router<AppState> {
    // Registered for every method so non-GET requests get our 405 body
    // instead of the router's empty one.
    Router::new().route("/", any(hello))
}

/// Decides the outcome of a request on `/` from its method alone.
pub fn greet(method: &Method) -> Result<Message, RestError> {
    if *method != Method::GET {
        return Err(RestError::MethodNotAllowed);
    }
    Ok(Message {
        message: GREETING.to_string(),
    })
}

async fn hello(
    State(AppState { request_logger }): State<AppState>,
    ConnectInfo(remote_address): ConnectInfo<SocketAddr>,
    method: Method,
) -> Response {
    match greet(&method) {
        Ok(message) => {
            request_logger.request_received(remote_address);
            (StatusCode::OK, Json(message)).into_response()
        }
        Err(err_response) => err_response.into_response(),
    }
}
