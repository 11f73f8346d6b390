//! Shared UI components reusable across panels
//!
//! Contains:
//! - `spinner` - Canvas spinner for the streaming state

pub mod spinner;
