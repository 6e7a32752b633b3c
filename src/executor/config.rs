//! [`Registry`](super::Registry) settings.

use serde::Deserialize;

/// Default annotation key field metadata is read from.
pub const DEFAULT_TAG_KEY: &str = "graphql";

/// Settings of a [`Registry`](super::Registry).
///
/// Deserializable from any `serde` format, missing entries taking their
/// defaults:
///
/// ```rust
/// use juniper_reflect::{Config, DuplicatePolicy};
///
/// let config: Config = serde_json::from_str(r#"{"duplicates": "reject"}"#).unwrap();
///
/// assert_eq!(config.tag_key, "graphql");
/// assert_eq!(config.duplicates, DuplicatePolicy::Reject);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Annotation key to read field metadata from, e.g. `graphql` in
    /// `graphql:"name,nullable"`.
    pub tag_key: String,

    /// Handling of repeated custom type registrations.
    pub duplicates: DuplicatePolicy,
}

/// Handling of a custom type registered for an already known type.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first registration and return its node.
    #[default]
    Ignore,
    /// Fail with [`CompileError::DuplicateType`](super::CompileError::DuplicateType).
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.into(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    /// Sets the annotation key to read field metadata from.
    #[must_use]
    pub fn tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Sets the [`DuplicatePolicy`].
    #[must_use]
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
