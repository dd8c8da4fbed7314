use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity shared by every clone of one feed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineageId(u64);

impl LineageId {
	/// Returns the raw id.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for LineageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Monotonic lineage id source.
#[derive(Debug, Default)]
pub(crate) struct LineageClock {
	next: AtomicU64,
}

impl LineageClock {
	/// Creates a clock whose first id is 1.
	pub const fn new() -> Self {
		Self { next: AtomicU64::new(0) }
	}

	/// Returns the next lineage id.
	pub fn next(&self) -> LineageId {
		LineageId(self.next.fetch_add(1, Ordering::Relaxed).wrapping_add(1))
	}
}

pub(crate) static LINEAGES: LineageClock = LineageClock::new();

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_monotonic_from_one() {
		let clock = LineageClock::new();
		assert_eq!(clock.next().get(), 1);
		assert_eq!(clock.next().get(), 2);
		assert_eq!(clock.next().to_string(), "#3");
	}
}
