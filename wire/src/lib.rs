//! Shared payload model for the backend message endpoint.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`: a single JSON object carrying the text the frontend renders.

use serde::{Deserialize, Serialize};

/// The message payload served at the backend root endpoint.
///
/// On the wire this is `{"message": "<text>"}`. The field is required, so a
/// body without it fails to decode and clients treat it like any other
/// malformed response. Unknown extra fields are ignored, which lets the
/// payload grow without breaking older clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motd {
    /// Human-readable text rendered verbatim by the frontend.
    pub message: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
