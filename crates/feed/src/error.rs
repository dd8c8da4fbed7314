//! Error types for feed tokens.

use thiserror::Error;

use crate::lineage::LineageId;
use crate::token::Resolution;

/// Misuse of a feed token lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
	/// A terminal operation ran on a lineage that was already resolved.
	/// The transport was not invoked.
	#[error("feed token lineage {lineage} already resolved by {winner}, rejected {attempted}")]
	AlreadyResolved {
		lineage: LineageId,
		winner: Resolution,
		attempted: Resolution,
	},
}

/// Errors from loading a [`TokenConfig`](crate::TokenConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the schema.
	#[error("invalid token config: {0}")]
	Parse(#[from] toml::de::Error),
}
