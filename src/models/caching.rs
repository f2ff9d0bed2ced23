//! Runtime caching policy for the service-worker build step.
//!
//! Serializes to the `runtimeCaching` shape Workbox consumes. JSON has no
//! regex literal, so `urlPattern` is written as the pattern source and the
//! build script must turn it back into a `RegExp` before handing it over.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Named caching strategy applied to matching requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachingStrategy {
    CacheFirst,
    CacheOnly,
    NetworkFirst,
    NetworkOnly,
    StaleWhileRevalidate,
}

/// Cache expiration limits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expiration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheOptions {
    pub cache_name: String,
    #[serde(default)]
    pub expiration: Expiration,
}

/// A single caching rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRule {
    /// Regular expression source matched against the request URL.
    ///
    /// Workbox reads a plain string as an exact URL, so consumers wrap this
    /// in `new RegExp(...)`.
    pub url_pattern: String,
    pub handler: CachingStrategy,
    pub options: CacheOptions,
}

impl CacheRule {
    pub fn compile(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.url_pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: self.url_pattern.clone(),
            reason: e.to_string(),
        })
    }
}

/// Ordered list of caching rules. The first matching rule wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingPolicy {
    pub runtime_caching: Vec<CacheRule>,
}

impl CachingPolicy {
    /// Compile every rule pattern once for repeated lookups.
    pub fn compile(&self) -> Result<CompiledPolicy<'_>, ConfigError> {
        let rules = self
            .runtime_caching
            .iter()
            .map(|rule| rule.compile().map(|regex| (regex, rule)))
            .collect::<Result<_, _>>()?;
        Ok(CompiledPolicy { rules })
    }

    /// Check that every rule pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compile().map(|_| ())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

/// A [`CachingPolicy`] with its patterns compiled.
#[derive(Debug)]
pub struct CompiledPolicy<'a> {
    rules: Vec<(Regex, &'a CacheRule)>,
}

impl<'a> CompiledPolicy<'a> {
    /// Find the first rule whose pattern matches `url`.
    pub fn rule_for(&self, url: &str) -> Option<&'a CacheRule> {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(url))
            .map(|(_, rule)| *rule)
    }
}
