//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome and interaction surfaces of the conversation
//! screen while the page owns the signals they read and write.

pub mod chat_header;
pub mod message_input;
pub mod message_list;
pub mod site_header;
