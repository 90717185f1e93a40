//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Which byte value counts as the "maximum" when computing prefix successors.
///
/// Older deployments computed stop keys by treating bytes as signed, so
/// `0x7F` was the largest byte and trailing `0x7F` bytes were dropped. Under
/// unsigned ordering that rule is not tight: a prefix ending in `0x7F` gets a
/// stop key that also admits keys whose next byte is `0x80..=0xFF`. Those
/// deployments also wrapped a `0xFF` byte to `0x00`, giving a stop key below
/// the prefix. Both policies here carry past `0xFF` instead, so the stop key
/// never excludes a key that has the prefix.
///
/// Switching a deployment to [`BoundaryPolicy::Unsigned`] changes the scan
/// ranges produced for such prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// `0x7F` is the maximum byte; a `0xFF` byte carries into the one before it.
    #[default]
    SignedLegacy,
    /// `0xFF` is the maximum byte; successors are tight under unsigned order.
    Unsigned,
}

impl BoundaryPolicy {
    /// The byte value trimmed from the end of a prefix before incrementing.
    #[inline]
    #[must_use]
    pub const fn max_byte(self) -> u8 {
        match self {
            Self::SignedLegacy => 0x7F,
            Self::Unsigned => 0xFF,
        }
    }
}

/// Configuration for [`TypedCodec`](crate::encoding::TypedCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum-byte rule for stop-key computation (default: signed legacy).
    pub boundary_policy: BoundaryPolicy,

    /// Reject boolean bytes other than `0x00` and `0x01` (default: true).
    ///
    /// When disabled, any non-zero byte decodes as `true`.
    pub strict_boolean: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { boundary_policy: BoundaryPolicy::default(), strict_boolean: true }
    }
}

impl CodecConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boundary policy.
    #[must_use]
    pub const fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Enable or disable strict boolean decoding.
    #[must_use]
    pub const fn with_strict_boolean(mut self, strict: bool) -> Self {
        self.strict_boolean = strict;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.boundary_policy, BoundaryPolicy::SignedLegacy);
        assert!(config.strict_boolean);
        assert_eq!(config.boundary_policy.max_byte(), 0x7F);
        assert_eq!(BoundaryPolicy::Unsigned.max_byte(), 0xFF);
    }

    #[test]
    fn builder() {
        let config = CodecConfig::new()
            .with_boundary_policy(BoundaryPolicy::Unsigned)
            .with_strict_boolean(false);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Unsigned);
        assert!(!config.strict_boolean);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"boundary_policy":"unsigned"}"#).unwrap();
        assert_eq!(config.boundary_policy, BoundaryPolicy::Unsigned);
        assert!(config.strict_boolean);

        let json = serde_json::to_string(&config).unwrap();
        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
