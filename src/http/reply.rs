use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// Write `data` as a JSON response with the given status. Serialization is
/// best effort; on failure the body is left empty.
pub fn json<T>(status: StatusCode, data: &T) -> Response
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(data).unwrap_or_else(|e| {
        error!(error = %e, "failed to serialize response body");
        Vec::new()
    });

    let mut response = body.into_response();
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Write an `{"error": message}` response
pub fn error(status: StatusCode, message: &str) -> Response {
    json(status, &json!({ "error": message }))
}
