//! Exactly-once completion notification for feed pipelines.
//!
//! The originator of a feed operation wraps its [`FeedTransport`] in a
//! [`FeedToken`] and passes the token into the pipeline. Stages clone and
//! forward it as they please; the transport hears about the outcome once.
//!
//! * [`FeedToken`]: cloneable completion handle (`ack` / `fail`)
//! * [`FeedTransport`]: outcome sink supplied by the originator
//! * [`ChannelTransport`]: transport bridging outcomes into an async receiver
//! * [`TokenConfig`]: double-resolution and unresolved-drop policies

// Only exercised by the integration tests.
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tracing_subscriber as _;

/// Lineage policies and their TOML loader.
pub mod config;
/// Token misuse and config errors.
pub mod error;
/// Lineage identities.
pub mod lineage;
/// Outcome payloads.
pub mod result;
/// Completion tokens.
pub mod token;
/// Outcome sinks.
pub mod transport;

pub use config::{DoubleResolutionPolicy, TokenConfig, UnresolvedPolicy};
pub use error::{ConfigError, TokenError};
pub use lineage::LineageId;
pub use result::{FeedResult, ResultCode};
pub use token::{FeedToken, Resolution};
pub use transport::{ChannelTransport, Delivery, DeliveryReceiver, FeedTransport};
