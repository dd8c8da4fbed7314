//! Lineage policies.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What happens when every clone of a lineage is dropped unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
	/// Deliver nothing and log a warning naming the lineage.
	#[default]
	Report,
	/// Deliver an implicit [`ResultCode::Abandoned`](crate::ResultCode::Abandoned)
	/// failure when the last clone is dropped.
	FailOnDrop,
}

/// What happens when a resolved lineage is resolved again.
///
/// The transport is never invoked a second time under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoubleResolutionPolicy {
	/// Log a warning and return [`TokenError::AlreadyResolved`](crate::TokenError::AlreadyResolved).
	#[default]
	Report,
	/// Panic.
	Panic,
}

/// Policies applied to every lineage created with this config.
///
/// ```toml
/// unresolved = "fail-on-drop"
/// double-resolution = "panic"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TokenConfig {
	pub unresolved: UnresolvedPolicy,
	pub double_resolution: DoubleResolutionPolicy,
}

impl TokenConfig {
	/// Parses a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	#[must_use]
	pub fn unresolved(mut self, policy: UnresolvedPolicy) -> Self {
		self.unresolved = policy;
		self
	}

	#[must_use]
	pub fn double_resolution(mut self, policy: DoubleResolutionPolicy) -> Self {
		self.double_resolution = policy;
		self
	}
}
