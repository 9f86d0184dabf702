//! HTTP protocol plumbing.
//!
//! The server speaks just enough HTTP/1.1 to serve its fixed routes:
//!
//! - **`connection`**: owns one accepted socket from read to close
//! - **`parser`**: extracts the method and path from the request line
//! - **`request`**: the parsed request representation
//! - **`response`**: response representation with status and body
//! - **`writer`**: serializes responses and streams file bodies
//!
//! Every response carries `Connection: close`; a connection serves exactly
//! one request and is then dropped. There is no keep-alive, no header
//! parsing, and no request body handling.
//!
//! # Request lifecycle
//!
//! ```text
//! accept → single read → parse request line → route → write response → close
//! ```
//!
//! The stats registry is touched twice along the way: once after the request
//! line parses (received bytes) and once after the response is written (sent
//! bytes). The two updates are separate critical sections.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
