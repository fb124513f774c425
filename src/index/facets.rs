use std::collections::BTreeSet;

use super::{filter::song_matches, Facet, FilterState, Index};

impl Index {
	/// Every distinct value observed across the catalog for `facet`, in
	/// lexicographic order.
	pub fn facet_values(&self, facet: Facet) -> Vec<String> {
		let mut values = BTreeSet::new();
		for song in self.songs() {
			values.extend(facet.values(song).iter().cloned());
		}
		values.into_iter().collect()
	}

	/// For each facet value, the number of results the user would see if
	/// they clicked that checkbox now: the value is toggled in a copy of the
	/// facet's selection, every other clause keeps the live state.
	///
	/// Whether the text query participates and whether zero-count options
	/// are listed are deployment policy, see [`crate::config::Config`].
	pub fn option_counts(&self, facet: Facet, state: &FilterState) -> Vec<(String, usize)> {
		let respect_text = self.config().count_respects_text_query;
		let hide_zero = self.config().hide_zero_count_options;

		self.facet_values(facet)
			.into_iter()
			.filter_map(|value| {
				let overridden = state.toggled(facet, &value);
				let count = self
					.songs()
					.iter()
					.filter(|song| {
						song_matches(song, state, Some((facet, &overridden)), respect_text)
					})
					.count();
				match hide_zero && count == 0 {
					true => None,
					false => Some((value, count)),
				}
			})
			.collect()
	}
}
