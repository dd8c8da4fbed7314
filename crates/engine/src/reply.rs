//! Search request and reply payloads.

use serde::{Deserialize, Serialize};

use crate::properties::Properties;

/// Document global id (12 bytes).
pub type GlobalId = [u8; 12];

/// One ranked hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
	pub gid: GlobalId,
	pub metric: f64,
	pub path: u32,
	pub distribution_key: u32,
}

impl Hit {
	pub fn new(gid: GlobalId, metric: f64) -> Self {
		Self { gid, metric, ..Self::default() }
	}
}

/// How much of the corpus a reply covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
	pub covered: u64,
	pub active: u64,
	pub soon_active: u64,
	pub degrade_reason: u32,
}

impl Coverage {
	pub fn new(active: u64) -> Self {
		Self {
			covered: active,
			active,
			soon_active: active,
			degrade_reason: 0,
		}
	}
}

/// The request a reply answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
	pub offset: u32,
	pub max_hits: u32,
	pub ranking: String,
	pub rank_properties: Properties,
	pub feature_overrides: Properties,
}

/// Result of one search, delivered to the originator of the request.
///
/// `Clone` copies every field except [`SearchReply::request`], which stays
/// with the original reply.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReply {
	pub valid: bool,
	pub offset: u32,
	pub distribution_key: u32,
	pub total_hit_count: u64,
	pub max_rank: f64,
	pub sort_index: Vec<u32>,
	pub sort_data: Vec<u8>,
	pub group_result: Vec<u8>,
	pub coverage: Coverage,
	pub use_wide_hits: bool,
	pub hits: Vec<Hit>,
	pub error_code: u32,
	pub error_message: String,
	pub use_queue_len: bool,
	pub queue_len: u32,
	#[serde(skip)]
	pub request: Option<Box<SearchRequest>>,
}

impl Default for SearchReply {
	fn default() -> Self {
		Self {
			valid: true,
			offset: 0,
			distribution_key: 0,
			total_hit_count: 0,
			max_rank: 0.0,
			sort_index: Vec::new(),
			sort_data: Vec::new(),
			group_result: Vec::new(),
			coverage: Coverage::default(),
			use_wide_hits: false,
			hits: Vec::new(),
			error_code: 0,
			error_message: String::new(),
			use_queue_len: false,
			queue_len: 0,
			request: None,
		}
	}
}

impl Clone for SearchReply {
	fn clone(&self) -> Self {
		Self {
			valid: self.valid,
			offset: self.offset,
			distribution_key: self.distribution_key,
			total_hit_count: self.total_hit_count,
			max_rank: self.max_rank,
			sort_index: self.sort_index.clone(),
			sort_data: self.sort_data.clone(),
			group_result: self.group_result.clone(),
			coverage: self.coverage,
			use_wide_hits: self.use_wide_hits,
			hits: self.hits.clone(),
			error_code: self.error_code,
			error_message: self.error_message.clone(),
			use_queue_len: self.use_queue_len,
			queue_len: self.queue_len,
			request: None,
		}
	}
}

impl SearchReply {
	/// Creates an empty, valid reply.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an invalid reply carrying an error.
	pub fn error(code: u32, message: impl Into<String>) -> Self {
		Self {
			valid: false,
			error_code: code,
			error_message: message.into(),
			..Self::default()
		}
	}

	/// Returns true when the reply carries an error code.
	pub fn is_error(&self) -> bool {
		self.error_code != 0
	}

	/// Number of hits in this reply.
	pub fn num_hits(&self) -> usize {
		self.hits.len()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn default_reply_is_valid_and_empty() {
		let reply = SearchReply::new();
		assert!(reply.valid);
		assert!(!reply.is_error());
		assert_eq!(reply.num_hits(), 0);
		assert!(reply.request.is_none());
	}

	#[test]
	fn clone_drops_request() {
		let mut reply = SearchReply::new();
		reply.total_hit_count = 7;
		reply.max_rank = 3.5;
		reply.hits = vec![Hit::new([1; 12], 3.5), Hit::new([2; 12], 1.0)];
		reply.coverage = Coverage::new(100);
		let mut request = SearchRequest {
			ranking: "default".into(),
			..SearchRequest::default()
		};
		request.rank_properties.add("vespa.now", "1234");
		reply.request = Some(Box::new(request));

		let copy = reply.clone();
		assert!(copy.request.is_none());
		assert_eq!(copy.hits, reply.hits);
		assert_eq!(copy.coverage, reply.coverage);
		assert_eq!(copy.total_hit_count, 7);
		assert_eq!(reply.request.as_ref().map(|r| r.rank_properties.lookup("vespa.now").get()), Some("1234"));
	}

	#[test]
	fn error_reply_is_invalid() {
		let reply = SearchReply::error(5, "timeout");
		assert!(!reply.valid);
		assert!(reply.is_error());
		assert_eq!(reply.error_message, "timeout");
	}
}
