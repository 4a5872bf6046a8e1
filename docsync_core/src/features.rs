use std::collections::HashMap;

use crate::scanner::AnnotatedComment;

/// Feature keys mapped to their comment bodies, in first-seen order.
///
/// Built once per run by a pure fold over the ordered comment sequence.
/// Groups accumulate append-only; nothing is merged across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeatureMap {
	/// Feature keys in insertion order.
	order: Vec<String>,
	/// Bodies grouped by feature key.
	groups: HashMap<String, Vec<String>>,
}

impl FeatureMap {
	/// Append a body under `key`, creating the group on first sight.
	/// Repeated identical bodies are kept; there is no deduplication.
	pub fn push(&mut self, key: &str, body: String) {
		if let Some(bodies) = self.groups.get_mut(key) {
			bodies.push(body);
		} else {
			self.order.push(key.to_string());
			self.groups.insert(key.to_string(), vec![body]);
		}
	}

	/// Number of distinct feature keys.
	#[must_use]
	pub fn len(&self) -> usize {
		self.order.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Iterate groups in insertion order: file-traversal order, then in-file
	/// order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.order.iter().map(|key| {
			let bodies = self
				.groups
				.get(key)
				.map(Vec::as_slice)
				.unwrap_or_default();
			(key.as_str(), bodies)
		})
	}

	/// Bodies recorded for `key`, if any.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.groups.get(key).map(Vec::as_slice)
	}
}

/// Fold an ordered sequence of annotated comments into a [`FeatureMap`].
pub fn aggregate(comments: impl IntoIterator<Item = AnnotatedComment>) -> FeatureMap {
	comments
		.into_iter()
		.fold(FeatureMap::default(), |mut map, comment| {
			map.push(&comment.feature_key, comment.body);
			map
		})
}
