//! Domain state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps conversation data free of rendering concerns so pages and components
//! can share it through Leptos signals without owning the model logic.

pub mod conversation;
