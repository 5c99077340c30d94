//! SHA-256 checksums rendered as lowercase hex

use std::fmt;

use anyhow::{bail, Result};
use sha2::{Digest, Sha256};

/// Known-answer vector used by [`self_check`] (FIPS 180-2, "abc").
const SELF_CHECK_INPUT: &str = "abc";
const SELF_CHECK_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// A SHA-256 digest as 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Hash the UTF-8 bytes of `data`.
    pub fn compute(data: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Compare against a caller-supplied hex digest, ignoring ASCII case.
    pub fn matches(&self, expected: &str) -> bool {
        self.0.eq_ignore_ascii_case(expected)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verify the hashing primitive against a known answer.
///
/// Run once at startup. A mismatch means the build is broken and the
/// service must not start.
pub fn self_check() -> Result<()> {
    let actual = Checksum::compute(SELF_CHECK_INPUT);
    if actual.as_str() != SELF_CHECK_DIGEST {
        bail!(
            "SHA-256 self-check failed: expected {}, got {}",
            SELF_CHECK_DIGEST,
            actual
        );
    }
    Ok(())
}
