use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::ConnectionHandler;

/// Accepts connections and serves them one at a time.
///
/// A failing connection is logged and skipped; a failing accept ends the loop.
pub async fn run<H: ConnectionHandler>(listen_addr: &str, handler: &H) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        if let Err(e) = handler.handle(socket, peer).await {
            tracing::error!("Connection error from {}: {:#}", peer, e);
        }
    }
}
