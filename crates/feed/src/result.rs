//! Outcome payload handed to a [`FeedTransport`](crate::FeedTransport).

use std::fmt;

use strand_engine::SearchReply;

/// Classification of a feed operation outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResultCode {
	#[default]
	Ok,
	/// The operation failed but may succeed if retried.
	TransientError,
	/// The operation failed and retrying will not help.
	PermanentError,
	/// Every token for the operation was dropped before anyone resolved it.
	Abandoned,
}

impl ResultCode {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Ok => "ok",
			Self::TransientError => "transient_error",
			Self::PermanentError => "permanent_error",
			Self::Abandoned => "abandoned",
		}
	}
}

impl fmt::Display for ResultCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Outcome of one feed operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedResult {
	code: ResultCode,
	message: String,
	reply: Option<Box<SearchReply>>,
}

impl FeedResult {
	/// Successful outcome without a reply.
	pub fn ok() -> Self {
		Self::default()
	}

	/// Failed outcome.
	pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
		Self {
			code,
			message: message.into(),
			reply: None,
		}
	}

	/// Outcome reported for a lineage that was dropped unresolved.
	pub fn abandoned() -> Self {
		Self::error(ResultCode::Abandoned, "feed token dropped without being resolved")
	}

	/// Attaches a reply payload.
	#[must_use]
	pub fn with_reply(mut self, reply: SearchReply) -> Self {
		self.reply = Some(Box::new(reply));
		self
	}

	pub fn code(&self) -> ResultCode {
		self.code
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn is_ok(&self) -> bool {
		self.code == ResultCode::Ok
	}

	pub fn reply(&self) -> Option<&SearchReply> {
		self.reply.as_deref()
	}

	/// Takes ownership of the attached reply.
	pub fn into_reply(self) -> Option<SearchReply> {
		self.reply.map(|reply| *reply)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn ok_result_has_no_reply() {
		let result = FeedResult::ok();
		assert!(result.is_ok());
		assert_eq!(result.code(), ResultCode::Ok);
		assert_eq!(result.message(), "");
		assert!(result.reply().is_none());
		assert_eq!(result.into_reply(), None);
	}

	#[test]
	fn reply_round_trips_through_result() {
		let mut reply = SearchReply::new();
		reply.total_hit_count = 3;
		let result = FeedResult::ok().with_reply(reply.clone());
		assert_eq!(result.reply().map(|r| r.total_hit_count), Some(3));
		assert_eq!(result.into_reply(), Some(reply));
	}

	#[test]
	fn abandoned_is_a_failure() {
		let result = FeedResult::abandoned();
		assert!(!result.is_ok());
		assert_eq!(result.code(), ResultCode::Abandoned);
		assert!(result.message().contains("dropped"));
	}

	#[test]
	fn codes_render_as_snake_case() {
		assert_eq!(ResultCode::Ok.to_string(), "ok");
		assert_eq!(ResultCode::TransientError.as_str(), "transient_error");
		assert_eq!(ResultCode::PermanentError.as_str(), "permanent_error");
		assert_eq!(ResultCode::Abandoned.to_string(), "abandoned");
		assert_eq!(ResultCode::default(), ResultCode::Ok);
	}
}
