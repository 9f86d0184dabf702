//! Server counter tracking.

use std::sync::Mutex;

/// A point-in-time copy of the server counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Requests whose request line parsed successfully
    pub requests: u64,

    /// Total bytes read from clients
    pub received_bytes: u64,

    /// Total bytes written to clients
    pub sent_bytes: u64,
}

/// Shared counter registry, one per server, handed to every connection.
///
/// Every access goes through a single mutex. Critical sections hold only the
/// arithmetic, never any I/O, so the three counters are always observed as a
/// consistent triple.
#[derive(Debug, Default)]
pub struct StatsRegistry {
    inner: Mutex<Stats>,
}

impl StatsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one request and adds both byte deltas in one critical section.
    ///
    /// Called once per successfully parsed request line, before routing, with
    /// the sent delta still zero.
    pub fn record(&self, received: u64, sent: u64) {
        let mut stats = self.inner.lock().unwrap();
        stats.requests += 1;
        stats.received_bytes += received;
        stats.sent_bytes += sent;
    }

    /// Adds to the sent-byte total without counting a request.
    ///
    /// Response writers call this once per completed response; it is the
    /// second, separate critical section for a request.
    pub fn add_sent(&self, sent: u64) {
        let mut stats = self.inner.lock().unwrap();
        stats.sent_bytes += sent;
    }

    /// Copies the current counters out under the lock.
    pub fn snapshot(&self) -> Stats {
        *self.inner.lock().unwrap()
    }
}
