//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page resolves its route parameters, owns the signals for its screen
//! state, and delegates rendering to `components`.

pub mod chat;
