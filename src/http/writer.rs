use std::io::SeekFrom;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::Response;
use crate::stats::StatsRegistry;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies.
const FILE_CHUNK_SIZE: usize = 1024;

/// Serializes a response into wire form.
///
/// Header order is fixed: Content-Type, Content-Length, Connection. Every
/// response announces `Connection: close` since a connection never serves a
/// second request.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers and separator
    let headers = format!(
        "Content-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        resp.content_type,
        resp.body.len()
    );
    buf.extend_from_slice(headers.as_bytes());

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes one fully-buffered response to the stream.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the whole serialized response, reports its length as sent
    /// bytes, and returns the count.
    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
        stats: &StatsRegistry,
    ) -> anyhow::Result<usize> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stats.add_sent(self.written as u64);
        Ok(self.written)
    }
}

/// Streams a file to the stream as an `application/octet-stream` response.
///
/// A file that cannot be opened falls back to the buffered 404 page. The
/// size is taken by seeking to the end and back, then the body is copied in
/// fixed-size chunks until end-of-file.
pub async fn send_file(
    stream: &mut TcpStream,
    path: &Path,
    stats: &StatsRegistry,
) -> anyhow::Result<()> {
    let mut file = match File::open(path).await {
        Ok(f) => f,
        Err(_) => {
            let mut writer = ResponseWriter::new(&Response::not_found());
            writer.write_to_stream(stream, stats).await?;
            return Ok(());
        }
    };

    let file_size = file.seek(SeekFrom::End(0)).await?;
    file.seek(SeekFrom::Start(0)).await?;

    let header = format!(
        "{} 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        HTTP_VERSION, file_size
    );
    stream.write_all(header.as_bytes()).await?;

    let mut chunk = [0u8; FILE_CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&chunk[..n]).await?;
    }

    // Sent accounting trusts the size reported by the opening seek rather
    // than the streamed total; a file that grows or shrinks mid-stream skews
    // the counters.
    stats.add_sent(header.len() as u64 + file_size);
    Ok(())
}
