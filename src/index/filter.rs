use std::collections::BTreeSet;

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use super::{Facet, Index, Song, SortKey};

/// The complete filter panel state for one render: facet selections, year
/// range, text query and sort order. This is a value type; intent handlers
/// build a new state and replace the old one instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
	pub selections: EnumMap<Facet, BTreeSet<String>>,
	pub year_min: Option<i32>,
	pub year_max: Option<i32>,
	pub text_query: String,
	pub sort_key: SortKey,
	pub ascending: bool,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			selections: Default::default(),
			year_min: None,
			year_max: None,
			text_query: String::new(),
			sort_key: SortKey::default(),
			ascending: true,
		}
	}
}

impl FilterState {
	pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
		self.selections[facet].contains(value)
	}

	pub fn with_selection(&self, facet: Facet, values: BTreeSet<String>) -> Self {
		let mut state = self.clone();
		state.selections[facet] = values;
		state
	}

	/// The hypothetical selection for `facet` if `value` were clicked now:
	/// added when absent, removed when present. The live state is untouched.
	pub fn toggled(&self, facet: Facet, value: &str) -> BTreeSet<String> {
		let mut selection = self.selections[facet].clone();
		if !selection.remove(value) {
			selection.insert(value.to_owned());
		}
		selection
	}
}

impl Index {
	/// Returns the matching subset in catalog order. Sorting is a separate
	/// stage, see [`super::sort_songs`].
	pub fn evaluate(&self, state: &FilterState) -> Vec<&Song> {
		self.songs()
			.iter()
			.filter(|song| song_matches(song, state, None, true))
			.collect()
	}
}

/// The combined predicate: AND across clauses, OR within a facet's selected
/// values. An empty selection leaves its clause always-true.
///
/// `overridden` substitutes one facet's selection without touching the live
/// state, which is how facet counts preview a toggle. `respect_text` lets
/// counting ignore the text clause when configured to.
pub(super) fn song_matches(
	song: &Song,
	state: &FilterState,
	overridden: Option<(Facet, &BTreeSet<String>)>,
	respect_text: bool,
) -> bool {
	for (facet, selection) in &state.selections {
		let selection = match overridden {
			Some((overridden_facet, values)) if overridden_facet == facet => values,
			_ => selection,
		};
		if selection.is_empty() {
			continue;
		}
		if !facet.values(song).iter().any(|v| selection.contains(v)) {
			return false;
		}
	}

	if state.year_min.is_some() || state.year_max.is_some() {
		// Songs without a release year never match a bounded range
		let Some(year) = song.release_year else {
			return false;
		};
		if state.year_min.is_some_and(|min| year < min) {
			return false;
		}
		if state.year_max.is_some_and(|max| year > max) {
			return false;
		}
	}

	if respect_text && !state.text_query.is_empty() {
		let query = state.text_query.to_lowercase();
		let matches = song.title.to_lowercase().contains(&query)
			|| song.artist.to_lowercase().contains(&query)
			|| song
				.keywords
				.iter()
				.any(|keyword| keyword.to_lowercase().contains(&query));
		if !matches {
			return false;
		}
	}

	true
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::catalog::RawSong;
	use crate::config::Config;
	use crate::index::Rules;

	fn make_index(raw_songs: Vec<RawSong>) -> Index {
		Index::build(raw_songs, Rules::default(), Config::default())
	}

	fn raw(id: &str, title: &str, artist: &str) -> RawSong {
		RawSong {
			id: id.to_owned(),
			title: title.to_owned(),
			artist: artist.to_owned(),
			..Default::default()
		}
	}

	fn ids(songs: &[&Song]) -> Vec<String> {
		songs.iter().map(|s| s.id.clone()).collect()
	}

	#[test]
	fn empty_state_matches_everything_in_catalog_order() {
		let index = make_index(vec![
			raw("s1", "Kai", "FSOL"),
			raw("s2", "Fantasy", "Stratovarius"),
			raw("s3", "Arv", "Ásmegin"),
		]);

		let results = index.evaluate(&FilterState::default());
		assert_eq!(ids(&results), vec!["s1", "s2", "s3"]);
	}

	#[test]
	fn selections_or_within_a_facet() {
		let index = make_index(vec![
			RawSong {
				country: Some("UK".to_owned()),
				..raw("s1", "Kai", "FSOL")
			},
			RawSong {
				country: Some("Deutschland".to_owned()),
				..raw("s2", "Autobahn", "Kraftwerk")
			},
			RawSong {
				country: Some("France".to_owned()),
				..raw("s3", "Flash", "Mr. Oizo")
			},
		]);

		let state = FilterState::default().with_selection(
			Facet::Countries,
			BTreeSet::from(["UK".to_owned(), "Germany".to_owned()]),
		);
		assert_eq!(ids(&index.evaluate(&state)), vec!["s1", "s2"]);
	}

	#[test]
	fn selections_and_across_facets() {
		let index = make_index(vec![
			RawSong {
				country: Some("UK".to_owned()),
				tags: vec!["House".to_owned()],
				..raw("s1", "One", "A")
			},
			RawSong {
				country: Some("UK".to_owned()),
				tags: vec!["Techno".to_owned()],
				..raw("s2", "Two", "B")
			},
			RawSong {
				country: Some("USA".to_owned()),
				tags: vec!["House".to_owned()],
				..raw("s3", "Three", "C")
			},
		]);

		let state = FilterState::default()
			.with_selection(Facet::Countries, BTreeSet::from(["UK".to_owned()]))
			.with_selection(Facet::Tags, BTreeSet::from(["house".to_owned()]));
		assert_eq!(ids(&index.evaluate(&state)), vec!["s1"]);
	}

	#[test]
	fn artist_selection_requires_exact_match() {
		let index = make_index(vec![
			raw("s1", "Kai", "FSOL"),
			raw("s2", "Lifeforms", "FSOL & Friends"),
		]);

		let state = FilterState::default()
			.with_selection(Facet::Artists, BTreeSet::from(["FSOL".to_owned()]));
		assert_eq!(ids(&index.evaluate(&state)), vec!["s1"]);
	}

	#[test]
	fn year_range_bounds_are_inclusive() {
		let index = make_index(vec![
			RawSong {
				release_year: Some(1991),
				..raw("s1", "One", "A")
			},
			RawSong {
				release_year: Some(1995),
				..raw("s2", "Two", "B")
			},
			RawSong {
				release_year: Some(1999),
				..raw("s3", "Three", "C")
			},
		]);

		let state = FilterState {
			year_min: Some(1991),
			year_max: Some(1995),
			..Default::default()
		};
		assert_eq!(ids(&index.evaluate(&state)), vec!["s1", "s2"]);
	}

	#[test]
	fn songs_without_a_year_fail_any_bounded_range() {
		let index = make_index(vec![
			raw("s1", "Undated", "A"),
			RawSong {
				release_year: Some(1995),
				..raw("s2", "Dated", "B")
			},
		]);

		let unbounded = FilterState::default();
		assert_eq!(ids(&index.evaluate(&unbounded)), vec!["s1", "s2"]);

		let min_only = FilterState {
			year_min: Some(1990),
			..Default::default()
		};
		assert_eq!(ids(&index.evaluate(&min_only)), vec!["s2"]);

		let max_only = FilterState {
			year_max: Some(2000),
			..Default::default()
		};
		assert_eq!(ids(&index.evaluate(&max_only)), vec!["s2"]);
	}

	#[test]
	fn text_query_is_a_case_insensitive_substring_over_title_artist_keywords() {
		let index = make_index(vec![
			raw("s1", "Love Theme", "Vangelis"),
			raw("s2", "Main Theme", "Vangelis"),
			RawSong {
				keywords: vec!["lovesong".to_owned()],
				..raw("s3", "Untitled", "Anonymous")
			},
		]);

		let state = FilterState {
			text_query: "love".to_owned(),
			..Default::default()
		};
		assert_eq!(ids(&index.evaluate(&state)), vec!["s1", "s3"]);
	}

	#[test]
	fn toggled_adds_when_absent_and_removes_when_present() {
		let state = FilterState::default()
			.with_selection(Facet::Tags, BTreeSet::from(["house".to_owned()]));

		assert_eq!(
			state.toggled(Facet::Tags, "techno"),
			BTreeSet::from(["house".to_owned(), "techno".to_owned()])
		);
		assert_eq!(state.toggled(Facet::Tags, "house"), BTreeSet::new());
		// The live selection is untouched
		assert!(state.is_selected(Facet::Tags, "house"));
	}
}
