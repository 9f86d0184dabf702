//! Fixed route table.
//!
//! Routes are matched against the request path only; the method is never
//! consulted. Rules are tried in declaration order and the first match wins,
//! so `/calc` without a `?` reaches no rule and falls through to 404.

use std::path::PathBuf;

use crate::http::response::{Response, StatusCode};
use crate::stats::Stats;

/// What the router decided to do with a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render the counter snapshot page
    Stats,
    /// Stream the file at the resolved path
    StaticFile(PathBuf),
    /// Render the sum of the two parsed operands
    Calc { a: i64, b: i64 },
    /// A rule matched but its parameters were malformed
    BadRequest,
    /// No rule matched
    NotFound,
}

struct Rule {
    matches: fn(&str) -> bool,
    dispatch: fn(&Router, &str) -> RouteAction,
}

/// Ordered rule table; evaluation order is part of the contract.
static RULES: &[Rule] = &[
    Rule {
        matches: is_stats,
        dispatch: dispatch_stats,
    },
    Rule {
        matches: is_static,
        dispatch: dispatch_static,
    },
    Rule {
        matches: is_calc,
        dispatch: dispatch_calc,
    },
];

fn is_stats(path: &str) -> bool {
    path == "/stats"
}

fn is_static(path: &str) -> bool {
    path.starts_with("/static/")
}

fn is_calc(path: &str) -> bool {
    path.starts_with("/calc?")
}

fn dispatch_stats(_router: &Router, _path: &str) -> RouteAction {
    RouteAction::Stats
}

fn dispatch_static(router: &Router, path: &str) -> RouteAction {
    let name = path.strip_prefix("/static/").unwrap_or_default();
    RouteAction::StaticFile(router.static_root.join(name))
}

fn dispatch_calc(_router: &Router, path: &str) -> RouteAction {
    let query = path.strip_prefix("/calc?").unwrap_or_default();
    match parse_calc_query(query) {
        Some((a, b)) => RouteAction::Calc { a, b },
        None => RouteAction::BadRequest,
    }
}

pub struct Router {
    static_root: PathBuf,
}

impl Router {
    pub fn new(static_root: PathBuf) -> Self {
        Self { static_root }
    }

    /// Maps a request path to an action using the ordered rule table.
    pub fn route(&self, path: &str) -> RouteAction {
        for rule in RULES {
            if (rule.matches)(path) {
                return (rule.dispatch)(self, path);
            }
        }
        RouteAction::NotFound
    }
}

/// Parses the literal query form `a=<int>&b=<int>`.
///
/// Scanf-style matching: an optional sign, a maximal digit run, the literal
/// `&b=`, a second integer. Anything after the second integer is ignored;
/// parameters in any other order fail.
pub fn parse_calc_query(query: &str) -> Option<(i64, i64)> {
    let rest = query.strip_prefix("a=")?;
    let (a, rest) = split_leading_int(rest)?;
    let rest = rest.strip_prefix("&b=")?;
    let (b, _rest) = split_leading_int(rest)?;
    Some((a, b))
}

/// Splits a leading signed integer off the front of `s`.
fn split_leading_int(s: &str) -> Option<(i64, &str)> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some((sign * value, &rest[end..]))
}

/// Renders the counter page served at `/stats`.
pub fn render_stats_page(stats: &Stats) -> Response {
    let body = format!(
        "<html><body><h1>Server Stats</h1><p>Requests: {}</p><p>Received Bytes: {}</p><p>Sent Bytes: {}</p></body></html>",
        stats.requests, stats.received_bytes, stats.sent_bytes
    );
    Response::html(StatusCode::Ok, body)
}

/// Renders the calculator result page.
pub fn render_calc_page(a: i64, b: i64) -> Response {
    let body = format!(
        "<html><body><h1>Calculation Result</h1><p>{} + {} = {}</p></body></html>",
        a,
        b,
        a + b
    );
    Response::html(StatusCode::Ok, body)
}
