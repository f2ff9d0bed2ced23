//! Core installability logic.
//!
//! This module provides:
//! - [`InstallState`] and [`request_install`] for the install flow
//! - [`HostInstallOffer`] wrapping the browser's `beforeinstallprompt` event

pub mod error;
mod install;
mod prompt;

pub use install::{InstallPrompt, InstallRequest, InstallState, InstallStore, request_install};
pub use prompt::HostInstallOffer;
