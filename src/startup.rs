use dioxus_logger::tracing;
use std::net::{Ipv4Addr, SocketAddr};

use crate::{error::AppError, router};

/// Serves the keep-alive endpoint on all interfaces.
///
/// Shares no state with the bot. Runs until the listener fails.
///
/// # Arguments
/// - `port` - Port to listen on
///
/// # Returns
/// - `Err(AppError::IoErr)` - Listener could not bind or the server failed
pub async fn serve_keep_alive(port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Keep-alive server listening on {}", addr);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
