use kiosk::http::response::{Response, StatusCode};
use kiosk::http::writer::serialize_response;

#[test]
fn test_serialize_exact_wire_format() {
    let response = Response::html(StatusCode::Ok, "<h1>hi</h1>");
    let bytes = serialize_response(&response);

    let expected = b"HTTP/1.1 200 OK\r\n\
        Content-Type: text/html\r\n\
        Content-Length: 11\r\n\
        Connection: close\r\n\
        \r\n\
        <h1>hi</h1>";
    assert_eq!(bytes, expected.to_vec());
}

#[test]
fn test_serialize_not_found_page() {
    let bytes = serialize_response(&Response::not_found());
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("Content-Length: 22\r\n"));
    assert!(text.ends_with("\r\n\r\n<h1>404 Not Found</h1>"));
}

#[test]
fn test_serialize_bad_request_page() {
    let bytes = serialize_response(&Response::bad_request());
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(text.contains("Content-Length: 24\r\n"));
    assert!(text.ends_with("<h1>400 Bad Request</h1>"));
}

#[test]
fn test_serialize_content_length_matches_body() {
    let body = vec![b'x'; 3000];
    let response = Response::html(StatusCode::Ok, body.clone());
    let bytes = serialize_response(&response);
    let text = String::from_utf8_lossy(&bytes);

    // Bodies larger than any fixed formatting buffer serialize intact
    assert!(text.contains("Content-Length: 3000\r\n"));
    assert!(bytes.ends_with(&body));
}

#[test]
fn test_serialize_always_closes_connection() {
    for response in [
        Response::html(StatusCode::Ok, "x"),
        Response::not_found(),
        Response::bad_request(),
    ] {
        let text = String::from_utf8(serialize_response(&response)).unwrap();
        assert!(text.contains("Connection: close\r\n"));
    }
}
