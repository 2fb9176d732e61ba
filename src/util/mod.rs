//! Shared helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything that touches the browser environment lives here behind plain
//! functions so page and component logic stays testable natively.

pub mod time;
