//! Networking modules for backend HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the single REST call; the payload schema lives in the
//! shared `wire` crate.

pub mod api;
