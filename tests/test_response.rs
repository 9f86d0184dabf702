use kiosk::http::response::{Response, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_html_helper_sets_content_type() {
    let response = Response::html(StatusCode::Ok, "<p>hi</p>");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.body, b"<p>hi</p>".to_vec());
}

#[test]
fn test_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"<h1>404 Not Found</h1>".to_vec());
    assert_eq!(response.content_type, "text/html");
}

#[test]
fn test_bad_request_helper() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"<h1>400 Bad Request</h1>".to_vec());
    assert_eq!(response.content_type, "text/html");
}
