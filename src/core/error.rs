//! Custom error types for the application.
//!
//! - [`InstallError`] - Native install prompt invocation failures
//! - [`ListenerError`] - Event listener registration on browser objects
//! - [`ConfigError`] - Static manifest and caching policy problems

use thiserror::Error;

/// Errors raised while driving the deferred install prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// The held handle has no callable `prompt()`
    #[error("install prompt not available on this event")]
    PromptUnavailable,
    /// `prompt()` threw or its promise rejected (offer already used, etc.)
    #[error("install prompt rejected: {0}")]
    PromptRejected(String),
    /// The held handle has no `userChoice` promise
    #[error("user choice not available on this event")]
    ChoiceUnavailable,
    #[error("user choice rejected: {0}")]
    ChoiceRejected(String),
    /// `userChoice` resolved to something other than `{ outcome, platform }`
    #[error("invalid user choice: {0}")]
    InvalidChoice(String),
}

/// Errors raised while subscribing to browser events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("browser window not available")]
    NoWindow,
    #[error("media query {0:?} could not be evaluated")]
    MediaQueryUnavailable(String),
    #[error("failed to add {0} listener")]
    RegistrationFailed(String),
}

/// Errors in the static PWA configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid icon size {0:?} (expected WxH)")]
    InvalidIconSize(String),
    #[error("invalid url pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("serialization failed: {0}")]
    Serialization(String),
}
