//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their display state as component-local signals and reach
//! the backend through the `net` helpers.

pub mod message_display;
