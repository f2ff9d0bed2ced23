//! Progressive Web App installability demo.
//!
//! - [`app`] - Root component
//! - [`components`] - Counter and install affordance
//! - [`config`] - Constants, web app manifest and caching policy
//! - [`core`] - Install state and prompt flow
//! - [`models`] - Manifest, caching and installability types
//! - [`utils`] - Browser API helpers

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
