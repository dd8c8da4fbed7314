//! Multi-valued, namespace-aware property bag.
//!
//! Rank profiles and feature overrides travel with a search request as a flat
//! map from dotted keys (`"vespa.hitcollector.heapsize"`) to ordered value
//! lists. Namespaced lookups join their components with `.`.

use rustc_hash::FxHashMap;

const EMPTY: &str = "";

/// Read-only view of the values stored under one key.
///
/// A missing key yields an empty view rather than an error; callers that
/// care use [`Property::found`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Property<'a> {
	values: &'a [String],
}

impl<'a> Property<'a> {
	fn new(values: &'a [String]) -> Self {
		Self { values }
	}

	/// Returns true when at least one value is stored.
	pub fn found(&self) -> bool {
		!self.values.is_empty()
	}

	/// Returns the first value, or the empty string.
	pub fn get(&self) -> &'a str {
		self.values.first().map_or(EMPTY, String::as_str)
	}

	/// Returns the first value, or `fallback` when nothing is stored.
	pub fn get_or<'f>(&self, fallback: &'f str) -> &'f str
	where
		'a: 'f,
	{
		self.values.first().map_or(fallback, String::as_str)
	}

	/// Returns the number of values.
	pub fn size(&self) -> usize {
		self.values.len()
	}

	/// Returns the value at `idx`, or the empty string when out of range.
	pub fn get_at(&self, idx: usize) -> &'a str {
		self.values.get(idx).map_or(EMPTY, String::as_str)
	}

	/// Iterates over all values in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
		self.values.iter().map(String::as_str)
	}
}

/// Callback interface for walking a [`Properties`] bag.
pub trait PropertiesVisitor {
	/// Called once per stored key.
	fn visit_property(&mut self, key: &str, values: Property<'_>);
}

impl<F> PropertiesVisitor for F
where
	F: FnMut(&str, Property<'_>),
{
	fn visit_property(&mut self, key: &str, values: Property<'_>) {
		self(key, values)
	}
}

/// Multi-valued string map keyed by dotted property names.
#[derive(Debug, Clone, Default)]
pub struct Properties {
	num_values: usize,
	data: FxHashMap<String, Vec<String>>,
}

impl Properties {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `value` under `key`. Empty keys are ignored.
	pub fn add(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
		let key = key.as_ref();
		if !key.is_empty() {
			self.data.entry(key.to_owned()).or_default().push(value.into());
			self.num_values += 1;
		}
		self
	}

	/// Returns the number of values stored under `key`.
	pub fn count(&self, key: &str) -> usize {
		if key.is_empty() {
			return 0;
		}
		self.data.get(key).map_or(0, Vec::len)
	}

	/// Removes every value stored under `key`.
	pub fn remove(&mut self, key: &str) -> &mut Self {
		if !key.is_empty()
			&& let Some(values) = self.data.remove(key)
		{
			self.num_values -= values.len();
		}
		self
	}

	/// Copies every key of `src` into this bag.
	///
	/// Keys present in both bags take the values from `src`; the previous
	/// values are discarded, not merged.
	pub fn import(&mut self, src: &Properties) -> &mut Self {
		for (key, values) in &src.data {
			if let Some(previous) = self.data.insert(key.clone(), values.clone()) {
				self.num_values -= previous.len();
			}
			self.num_values += values.len();
		}
		self
	}

	/// Removes all keys.
	pub fn clear(&mut self) -> &mut Self {
		if !self.data.is_empty() {
			self.data = FxHashMap::default();
			self.num_values = 0;
		}
		self
	}

	/// Returns the number of distinct keys.
	pub fn num_keys(&self) -> usize {
		self.data.len()
	}

	/// Returns the total number of values across all keys.
	pub fn num_values(&self) -> usize {
		self.num_values
	}

	/// Looks up a fully qualified key.
	pub fn lookup(&self, key: &str) -> Property<'_> {
		if key.is_empty() {
			return Property::default();
		}
		self.data.get(key).map_or_else(Property::default, |values| Property::new(values))
	}

	/// Looks up `key` inside a chain of namespaces, e.g. `["vespa", "matching"]`.
	///
	/// Any empty namespace component or an empty key yields an empty view.
	pub fn lookup_ns(&self, namespaces: &[&str], key: &str) -> Property<'_> {
		if key.is_empty() || namespaces.iter().any(|ns| ns.is_empty()) {
			return Property::default();
		}
		let mut full = namespaces.join(".");
		if !full.is_empty() {
			full.push('.');
		}
		full.push_str(key);
		self.lookup(&full)
	}

	/// Calls `visitor` for every key in the bag.
	pub fn visit_properties(&self, visitor: &mut impl PropertiesVisitor) {
		for (key, values) in &self.data {
			visitor.visit_property(key, Property::new(values));
		}
	}

	/// Calls `visitor` for every key directly or transitively below `ns`,
	/// passing the key with the `ns.` prefix stripped.
	pub fn visit_namespace(&self, ns: &str, visitor: &mut impl PropertiesVisitor) {
		let prefix = format!("{ns}.");
		for (key, values) in &self.data {
			if let Some(rest) = key.strip_prefix(&prefix)
				&& !rest.is_empty()
			{
				visitor.visit_property(rest, Property::new(values));
			}
		}
	}

	/// Order-independent content hash.
	pub fn hash_code(&self) -> u32 {
		let mut hash = (self.num_keys() as u32).wrapping_add(self.num_values as u32);
		for (key, values) in &self.data {
			hash = hash.wrapping_add(raw_hash(key.as_bytes()));
			for value in values {
				hash = hash.wrapping_add(raw_hash(value.as_bytes()));
			}
		}
		hash
	}

	/// Exchanges the contents of two bags.
	pub fn swap(&mut self, other: &mut Properties) {
		std::mem::swap(self, other);
	}
}

impl PartialEq for Properties {
	fn eq(&self, other: &Self) -> bool {
		self.num_values == other.num_values && self.data == other.data
	}
}

impl Eq for Properties {}

fn raw_hash(bytes: &[u8]) -> u32 {
	bytes.iter().fold(0u32, |res, &b| res.rotate_left(7).wrapping_add(u32::from(b)))
}
