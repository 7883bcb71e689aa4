use std::sync::Arc;

use crate::utils::logging::RequestLogger;

pub mod services;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub request_logger: Arc<dyn RequestLogger>,
}

impl AppState {
    pub fn new(request_logger: Arc<dyn RequestLogger>) -> Self {
        Self { request_logger }
    }
}
