//! UI components built with Leptos.
//!
//! - [`counter`] - Counter demo
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`install`] - Install affordance (prompt button or manual instructions)

pub mod counter;
pub mod icons;
pub mod install;

pub use counter::Counter;
pub use install::InstallBanner;
