//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`WebManifest`], [`ManifestIcon`], [`IconSize`] - Web app manifest
//! - [`CachingPolicy`], [`CacheRule`] - Service-worker runtime caching
//! - [`Platform`], [`StandaloneSignals`], [`InstallAffordance`] - Installability

mod caching;
mod install;
mod manifest;

pub use caching::{
    CacheOptions, CacheRule, CachingPolicy, CachingStrategy, CompiledPolicy, Expiration,
};
pub use install::{InstallAffordance, InstallOutcome, Platform, StandaloneSignals, UserChoice};
pub use manifest::{DisplayMode, IconSize, ManifestIcon, WebManifest};
