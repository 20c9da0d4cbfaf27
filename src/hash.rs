//! Batch cache-bust token
//!
//! One token per pipeline invocation, derived from the version string
//! alone. Every widget built in the same run shares it, and two runs with
//! the same version token reproduce the same token even when widget
//! sources differ. That keeps artifact URLs stable across rebuilds of the
//! same release at the cost of not cache-busting source-only edits - a
//! documented trade-off, not per-file content addressing.

use sha2::{Digest, Sha256};

/// Length of the token in hex characters
pub const TOKEN_LEN: usize = 6;

/// Derive the batch token from a version string
pub fn batch_token(version: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.as_bytes());
    let digest = hasher.finalize();
    let mut token = format!("{digest:x}");
    token.truncate(TOKEN_LEN);
    token
}
