/// HTTP status codes the server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A fully-materialized response ready for serialization.
///
/// Responses carry exactly three headers on the wire (Content-Type,
/// Content-Length, Connection), so only the status, content type, and body
/// are modeled. File bodies never pass through here; they are streamed by the
/// writer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an HTML response with the given status.
    pub fn html(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.into(),
        }
    }

    /// Creates the canned 404 page.
    pub fn not_found() -> Self {
        Self::html(StatusCode::NotFound, "<h1>404 Not Found</h1>")
    }

    /// Creates the canned 400 page.
    pub fn bad_request() -> Self {
        Self::html(StatusCode::BadRequest, "<h1>400 Bad Request</h1>")
    }
}
