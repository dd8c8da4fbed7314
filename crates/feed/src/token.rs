//! Exactly-once completion tokens.
//!
//! A [`FeedToken`] is handed to a feed operation and travels through every
//! pipeline stage that touches it. Stages may clone it freely; all clones of
//! one token form a *lineage* sharing one completion state, and the first
//! terminal call on any clone is the only one that reaches the transport.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::config::{DoubleResolutionPolicy, TokenConfig, UnresolvedPolicy};
use crate::error::TokenError;
use crate::lineage::{LINEAGES, LineageId};
use crate::result::{FeedResult, ResultCode};
use crate::transport::FeedTransport;

const PENDING: u8 = 0;
const ACKED: u8 = 1;
const FAILED: u8 = 2;

/// How a lineage was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
	Ack,
	Fail,
}

impl Resolution {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Ack => "ack",
			Self::Fail => "fail",
		}
	}

	pub const fn is_success(self) -> bool {
		matches!(self, Self::Ack)
	}

	const fn encode(self) -> u8 {
		match self {
			Self::Ack => ACKED,
			Self::Fail => FAILED,
		}
	}

	const fn decode(raw: u8) -> Option<Self> {
		match raw {
			ACKED => Some(Self::Ack),
			FAILED => Some(Self::Fail),
			_ => None,
		}
	}
}

impl fmt::Display for Resolution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Completion state shared by every clone of one lineage.
struct TokenState {
	lineage: LineageId,
	transport: Arc<dyn FeedTransport>,
	/// `PENDING` until the winning terminal call swaps in its resolution.
	status: AtomicU8,
	config: TokenConfig,
}

impl TokenState {
	fn resolution(&self) -> Option<Resolution> {
		Resolution::decode(self.status.load(Ordering::Acquire))
	}

	fn resolve(&self, resolution: Resolution, result: FeedResult) -> Result<(), TokenError> {
		if let Err(current) = self.status.compare_exchange(PENDING, resolution.encode(), Ordering::AcqRel, Ordering::Acquire) {
			let winner = Resolution::decode(current).unwrap_or(resolution);
			return Err(self.reject(winner, resolution));
		}

		tracing::debug!(lineage = %self.lineage, resolution = %resolution, code = %result.code(), "feed.token.deliver");
		self.transport.send(result, resolution.is_success());
		Ok(())
	}

	fn reject(&self, winner: Resolution, attempted: Resolution) -> TokenError {
		let err = TokenError::AlreadyResolved {
			lineage: self.lineage,
			winner,
			attempted,
		};
		match self.config.double_resolution {
			DoubleResolutionPolicy::Report => {
				tracing::warn!(lineage = %self.lineage, winner = %winner, attempted = %attempted, "feed.token.double_resolution");
			}
			DoubleResolutionPolicy::Panic => panic!("{err}"),
		}
		err
	}
}

impl Drop for TokenState {
	fn drop(&mut self) {
		if self.resolution().is_some() {
			return;
		}
		match self.config.unresolved {
			UnresolvedPolicy::Report => {
				tracing::warn!(lineage = %self.lineage, "feed.token.unresolved_drop");
			}
			UnresolvedPolicy::FailOnDrop => {
				tracing::debug!(lineage = %self.lineage, "feed.token.fail_on_drop");
				let _ = self.resolve(Resolution::Fail, FeedResult::abandoned());
			}
		}
	}
}

/// Handle guaranteeing that a feed operation's originator hears back once.
///
/// Cloning hands the same lineage to another pipeline stage. Whichever clone
/// first calls [`ack`](Self::ack) or [`fail`](Self::fail) delivers the outcome
/// to the transport; every later terminal call on any clone returns
/// [`TokenError::AlreadyResolved`] and leaves the transport untouched.
///
/// Dropping every clone without resolving follows the lineage's
/// [`UnresolvedPolicy`].
#[derive(Clone)]
pub struct FeedToken {
	state: Arc<TokenState>,
}

impl FeedToken {
	/// Starts a new lineage bound to `transport` with default policies.
	pub fn new(transport: Arc<dyn FeedTransport>) -> Self {
		Self::with_config(transport, &TokenConfig::default())
	}

	/// Starts a new lineage bound to `transport`.
	pub fn with_config(transport: Arc<dyn FeedTransport>, config: &TokenConfig) -> Self {
		let lineage = LINEAGES.next();
		tracing::trace!(lineage = %lineage, unresolved = ?config.unresolved, "feed.token.new");
		Self {
			state: Arc::new(TokenState {
				lineage,
				transport,
				status: AtomicU8::new(PENDING),
				config: *config,
			}),
		}
	}

	/// Acknowledges the operation with an empty success outcome.
	pub fn ack(&self) -> Result<(), TokenError> {
		self.ack_with(FeedResult::ok())
	}

	/// Acknowledges the operation with `result`.
	pub fn ack_with(&self, result: FeedResult) -> Result<(), TokenError> {
		self.state.resolve(Resolution::Ack, result)
	}

	/// Fails the operation with a generic transient error.
	pub fn fail(&self) -> Result<(), TokenError> {
		self.fail_with(FeedResult::error(ResultCode::TransientError, "feed operation failed"))
	}

	/// Fails the operation with `result`.
	pub fn fail_with(&self, result: FeedResult) -> Result<(), TokenError> {
		self.state.resolve(Resolution::Fail, result)
	}

	pub fn lineage(&self) -> LineageId {
		self.state.lineage
	}

	pub fn is_resolved(&self) -> bool {
		self.state.resolution().is_some()
	}

	/// Returns how the lineage was resolved, if it has been.
	pub fn resolution(&self) -> Option<Resolution> {
		self.state.resolution()
	}

	/// Number of live clones in this lineage, including `self`.
	pub fn handles(&self) -> usize {
		Arc::strong_count(&self.state)
	}

	/// Returns true when both tokens belong to the same lineage.
	pub fn same_lineage(&self, other: &FeedToken) -> bool {
		Arc::ptr_eq(&self.state, &other.state)
	}
}

impl fmt::Debug for FeedToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FeedToken")
			.field("lineage", &self.state.lineage)
			.field("resolution", &self.state.resolution())
			.field("handles", &self.handles())
			.finish()
	}
}
