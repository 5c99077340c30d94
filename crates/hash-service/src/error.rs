//! Client-facing request errors

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::html::html_escape;
use crate::validation::{HASH_HEX_LENGTH, MAX_INPUT_LENGTH};

/// Rejection of a `/hash` request. Every variant maps to `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{field} cannot be null")]
    Missing { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters", max = MAX_INPUT_LENGTH)]
    TooLong { field: &'static str },

    #[error("Invalid hash format: expected {len} hex characters", len = HASH_HEX_LENGTH)]
    InvalidHashLength,

    #[error("Invalid hash format: must contain only hexadecimal characters (0-9, a-f, A-F)")]
    InvalidHashCharacters,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = format!(
            "<html><body><h1>Bad Request</h1><p>{}</p></body></html>",
            html_escape(&self.to_string())
        );
        (self.status(), Html(body)).into_response()
    }
}
