//! hash-service library: the request contract behind `GET /hash`.
//!
//! The binary is a thin axum shell over these modules; integration tests
//! drive [`router::app`] directly.

pub mod checksum;
pub mod config;
pub mod error;
pub mod handler;
pub mod html;
pub mod router;
pub mod validation;

pub use checksum::Checksum;
pub use config::Config;
pub use error::RequestError;
pub use handler::{handle, HashOutcome, HashParams, Verification, HASH_PATH};
pub use router::app;
pub use validation::{HASH_HEX_LENGTH, MAX_INPUT_LENGTH};
