//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error_page::ErrorPage;

/// The number of characters of a request or response body included in the
/// `info` level logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The method, URI and status are logged at the `info` level along with the
/// start of the body. Bodies longer than [LOG_BODY_LENGTH_LIMIT] characters
/// are logged in full at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body) = read_body(body).await else {
        return ErrorPage::bad_request("Não foi possível ler a requisição.").into_response();
    };
    log_request(&parts, &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let Some(body) = read_body(body).await else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

async fn read_body(body: Body) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read body: {error}"))
        .ok()
}

fn log_request(parts: &request::Parts, body: &Bytes) {
    let text = String::from_utf8_lossy(body);
    let (preview, is_truncated) = truncate(&text, LOG_BODY_LENGTH_LIMIT);

    tracing::info!(
        "Received request: {} {}\nbody: {preview:?}{}",
        parts.method,
        parts.uri,
        if is_truncated { "..." } else { "" }
    );

    if is_truncated {
        tracing::debug!("Full request body: {text:?}");
    }
}

fn log_response(parts: &response::Parts, body: &Bytes) {
    let text = String::from_utf8_lossy(body);
    let (preview, is_truncated) = truncate(&text, LOG_BODY_LENGTH_LIMIT);

    tracing::info!(
        "Sending response: {}\nheaders: {:?}\nbody: {preview:?}{}",
        parts.status,
        parts.headers,
        if is_truncated { "..." } else { "" }
    );

    if is_truncated {
        tracing::debug!("Full response body: {text:?}");
    }
}

/// The first `limit` characters of `text` and whether anything was cut off.
fn truncate(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}
