//! # client
//!
//! Leptos + WASM frontend for the message display demo. The app mounts a
//! single component that fetches the backend message once and renders it
//! under a fixed heading.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
