use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request_line;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, send_file};
use crate::router::{RouteAction, Router, render_calc_page, render_stats_page};
use crate::stats::StatsRegistry;

/// Upper bound on how much of a request is read. Everything past the request
/// line is ignored, so one bounded read is all a request ever gets.
const READ_BUF_SIZE: usize = 1024;

/// One accepted connection, owned for its whole lifetime.
///
/// The socket closes when the connection drops, so an early return anywhere
/// in `run` still releases it.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    router: Arc<Router>,
    stats: Arc<StatsRegistry>,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        router: Arc<Router>,
        stats: Arc<StatsRegistry>,
    ) -> Self {
        Self {
            stream,
            peer,
            router,
            stats,
        }
    }

    /// Serves exactly one request and returns; the socket closes on drop.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buf = BytesMut::with_capacity(READ_BUF_SIZE);
        let n = self.stream.read_buf(&mut buf).await?;

        if n == 0 {
            // Peer went away before sending anything; no response
            return Ok(());
        }

        let request = match parse_request_line(&buf) {
            Ok(req) => req,
            Err(e) => {
                tracing::debug!("Bad request line from {}: {:?}", self.peer, e);
                return self.send(Response::bad_request()).await;
            }
        };

        // Received bytes are recorded before routing, so the /stats page
        // includes the request that is asking for it.
        self.stats.record(n as u64, 0);
        tracing::debug!("{} {} from {}", request.method, request.path, self.peer);

        match self.router.route(&request.path) {
            RouteAction::Stats => {
                let page = render_stats_page(&self.stats.snapshot());
                self.send(page).await
            }
            RouteAction::StaticFile(path) => {
                send_file(&mut self.stream, &path, &self.stats).await
            }
            RouteAction::Calc { a, b } => self.send(render_calc_page(a, b)).await,
            RouteAction::BadRequest => self.send(Response::bad_request()).await,
            RouteAction::NotFound => self.send(Response::not_found()).await,
        }
    }

    async fn send(&mut self, response: Response) -> anyhow::Result<()> {
        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream, &self.stats).await?;
        Ok(())
    }
}
