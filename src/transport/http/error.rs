//! Error type carried out of handlers into HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failures a handler surfaces to the client through the generic error path.
///
/// Validation problems never reach this type; the handler re-renders the
/// form with messages instead.
#[derive(Debug, Error)]
pub enum WebError {
    /// A referenced record does not exist. Carries the noun shown on the
    /// error page ("Category", "Product").
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Store or renderer failure. Logged, reported as a bare 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(noun) => {
                let page = error_page("Not Found", &format!("{} not found", noun));
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            WebError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                let page = error_page("Error", "Something went wrong handling the request.");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
            }
        }
    }
}

fn error_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n<p>{message}</p>\n</body>\n</html>\n"
    )
}
