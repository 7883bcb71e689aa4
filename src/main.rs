use std::{process::ExitCode, sync::Arc};

use simple_service::{
    services::rest::server::RestServer,
    utils::logging::{init_logging, TracingRequestLogger},
    AppState,
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let state = AppState::new(Arc::new(TracingRequestLogger));

    let rest_server = match RestServer::new(state).await {
        Ok(rest_server) => rest_server,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = rest_server.serve().await {
        error!("{:#}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
