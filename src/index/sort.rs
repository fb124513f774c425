use serde::{Deserialize, Serialize};
use unicase::UniCase;

use super::Song;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
	#[default]
	Title,
	Artist,
	Year,
}

/// Stable sort of an evaluated result set. Descending order reverses the
/// comparator's sign rather than the sequence, so equal keys keep their
/// relative input order under both directions. Songs without a release year
/// sort as year 0, earliest of all.
pub fn sort_songs(songs: &mut [&Song], key: SortKey, ascending: bool) {
	songs.sort_by(|a, b| {
		let ordering = match key {
			SortKey::Title => UniCase::new(&a.title).cmp(&UniCase::new(&b.title)),
			SortKey::Artist => UniCase::new(&a.artist).cmp(&UniCase::new(&b.artist)),
			SortKey::Year => a.release_year.unwrap_or(0).cmp(&b.release_year.unwrap_or(0)),
		};
		match ascending {
			true => ordering,
			false => ordering.reverse(),
		}
	});
}

#[cfg(test)]
mod test {
	use super::*;

	fn song(id: &str, title: &str, artist: &str, year: Option<i32>) -> Song {
		Song {
			id: id.to_owned(),
			title: title.to_owned(),
			artist: artist.to_owned(),
			release_year: year,
			..Default::default()
		}
	}

	fn sorted_ids(songs: &[Song], key: SortKey, ascending: bool) -> Vec<String> {
		let mut refs = songs.iter().collect::<Vec<_>>();
		sort_songs(&mut refs, key, ascending);
		refs.into_iter().map(|s| s.id.clone()).collect()
	}

	#[test]
	fn titles_sort_case_insensitively() {
		let songs = vec![
			song("s1", "renegade", "Hammerfall", None),
			song("s2", "Destiny", "Stratovarius", None),
			song("s3", "Rain of Fury", "Rhapsody of Fire", None),
		];
		assert_eq!(
			sorted_ids(&songs, SortKey::Title, true),
			vec!["s2", "s3", "s1"]
		);
	}

	#[test]
	fn missing_years_sort_earliest() {
		let songs = vec![
			song("s1", "One", "A", Some(1996)),
			song("s2", "Two", "B", None),
			song("s3", "Three", "C", Some(1991)),
		];
		assert_eq!(
			sorted_ids(&songs, SortKey::Year, true),
			vec!["s2", "s3", "s1"]
		);
		assert_eq!(
			sorted_ids(&songs, SortKey::Year, false),
			vec!["s1", "s3", "s2"]
		);
	}

	#[test]
	fn equal_keys_keep_input_order_in_both_directions() {
		let songs = vec![
			song("s1", "Same", "Z", Some(1995)),
			song("s2", "Same", "Y", Some(1995)),
			song("s3", "Other", "X", Some(1990)),
		];

		assert_eq!(
			sorted_ids(&songs, SortKey::Title, true),
			vec!["s3", "s1", "s2"]
		);
		// Reversing the sign moves the group, not the tied members
		assert_eq!(
			sorted_ids(&songs, SortKey::Title, false),
			vec!["s1", "s2", "s3"]
		);
		assert_eq!(
			sorted_ids(&songs, SortKey::Year, false),
			vec!["s1", "s2", "s3"]
		);
	}
}
