/// A parsed request line.
///
/// Only the method and path are modeled. Headers and bodies are never
/// inspected by any route, so they are never parsed. The method is carried
/// as-is and not validated against a verb list; no route branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First whitespace-delimited token of the request (e.g. "GET")
    pub method: String,
    /// Second token: the request path, query string included
    pub path: String,
}
