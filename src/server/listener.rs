use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;
use crate::stats::StatsRegistry;

/// Binds the listener and serves forever.
///
/// A bind failure is fatal and propagates out; everything after that point
/// only ever logs and keeps going.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!("Listening on {}", cfg.listen_addr());

    let router = Arc::new(Router::new(cfg.static_root.clone()));
    let stats = Arc::new(StatsRegistry::new());

    serve(listener, router, stats).await
}

/// Accept loop: one spawned task per connection, never joined.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    stats: Arc<StatsRegistry>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                // Transient accept errors must not bring the server down
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        let stats = Arc::clone(&stats);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer, router, stats);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
