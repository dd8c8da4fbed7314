//! Payload types that ride along with search and feed operations.
//!
//! * [`Properties`]: multi-valued rank property bag
//! * [`SearchReply`]: outcome of one search request

pub mod properties;
pub mod reply;

pub use properties::{Properties, PropertiesVisitor, Property};
pub use reply::{Coverage, GlobalId, Hit, SearchReply, SearchRequest};
