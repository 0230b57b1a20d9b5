//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept as plain structs wrapped in component-local signals; a
//! single-view app has no need for global context providers.

pub mod motd;
