//! `GET /hash` - compute and optionally verify a SHA-256 checksum
//!
//! [`handle`] holds the whole request contract and knows nothing about
//! axum; [`hash_handler`] adapts it to the router.

use axum::{
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::checksum::Checksum;
use crate::error::RequestError;
use crate::html;
use crate::validation::{non_blank, validate_hash_format, validate_input};

/// Path of the hash endpoint; unmatched paths redirect here.
pub const HASH_PATH: &str = "/hash";

/// Query parameters for `/hash`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HashParams {
    /// Payload to hash
    pub data: Option<String>,

    /// Previously computed checksum to compare against
    pub expected: Option<String>,
}

impl HashParams {
    /// Collect decoded query pairs.
    ///
    /// A repeated key keeps every value, joined with `,` in query order
    /// (`data=a&data=b` hashes `"a,b"`). Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "data" => &mut params.data,
                "expected" => &mut params.expected,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        params
    }
}

/// Result of comparing the computed checksum with `expected`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Pass,
    /// Carries the trimmed expected value for echoing back
    Fail { expected: String },
    NotRequested,
}

/// Successful outcome of a `/hash` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// No payload was supplied
    Usage,
    Hashed {
        data: String,
        checksum: Checksum,
        verification: Verification,
    },
}

impl HashOutcome {
    /// Render the response body.
    pub fn render(&self) -> String {
        match self {
            HashOutcome::Usage => html::usage_page(),
            HashOutcome::Hashed {
                data,
                checksum,
                verification,
            } => html::render_result(data, checksum, verification),
        }
    }
}

impl IntoResponse for HashOutcome {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

/// Validate, hash and verify one request.
pub fn handle(params: &HashParams) -> Result<HashOutcome, RequestError> {
    let Some(data) = non_blank(params.data.as_deref()) else {
        return Ok(HashOutcome::Usage);
    };

    let data = validate_input(Some(data), "data")?;

    let expected = match non_blank(params.expected.as_deref()) {
        Some(raw) => {
            let trimmed = validate_input(Some(raw), "expected")?.trim();
            validate_hash_format(trimmed)?;
            Some(trimmed)
        }
        None => None,
    };

    let checksum = Checksum::compute(data);

    let verification = match expected {
        Some(expected) if checksum.matches(expected) => Verification::Pass,
        Some(expected) => Verification::Fail {
            expected: expected.to_string(),
        },
        None => Verification::NotRequested,
    };

    Ok(HashOutcome::Hashed {
        data: data.to_string(),
        checksum,
        verification,
    })
}

/// Handler for `GET /hash`
pub async fn hash_handler(Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let params = HashParams::from_pairs(pairs);
    match handle(&params) {
        Ok(outcome) => {
            match &outcome {
                HashOutcome::Usage => tracing::debug!("No data supplied, serving usage page"),
                HashOutcome::Hashed {
                    checksum,
                    verification,
                    ..
                } => tracing::debug!("Computed checksum {} ({:?})", checksum, verification),
            }
            outcome.into_response()
        }
        Err(err) => {
            tracing::debug!("Rejected hash request: {}", err);
            err.into_response()
        }
    }
}

/// Fallback for `/` and unmatched paths
pub async fn redirect_to_hash() -> Redirect {
    Redirect::to(HASH_PATH)
}
