//! Display state for the backend message banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `MessageDisplay` as a component-local signal. Only the fetch
//! response handler writes it, so a failed fetch leaves the banner at its
//! default.

#[cfg(test)]
#[path = "motd_test.rs"]
mod motd_test;

/// Message text shown under the page heading.
///
/// The default empty string is what renders before the fetch resolves, and
/// forever after a failed fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MotdState {
    pub text: String,
}
