use crate::http::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer held no tokens at all
    Empty,
    /// A method was present but no path followed
    MissingPath,
}

/// Extracts the method and path from a raw request buffer.
///
/// The first two whitespace-delimited tokens become the method and the path;
/// the rest of the request line and all subsequent lines are ignored. The
/// buffer is decoded lossily, so non-UTF-8 bytes cannot fail the parse on
/// their own.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    let mut tokens = text.split_whitespace();

    let method = tokens.next().ok_or(ParseError::Empty)?;
    let path = tokens.next().ok_or(ParseError::MissingPath)?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
    })
}
