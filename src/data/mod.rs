//! Static data providers for the conversation screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the backend collaborators this slice does not own: the
//! conversation fetch and the authenticated-session identity provider.

pub mod threads;
