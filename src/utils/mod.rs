//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`dom`] - Environment queries (user agent, media queries, location)
//! - [`EventListener`] - Event listener removed on drop
//! - [`log`] - Console logging

pub mod dom;
mod listener;
pub mod log;

pub use listener::EventListener;
