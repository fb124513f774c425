use enum_map::Enum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::RawSong;
use crate::config::Config;

mod facets;
mod filter;
mod normalize;
mod rules;
mod sort;

pub use filter::*;
pub use normalize::*;
pub use rules::*;
pub use sort::*;

/// One catalog entry after normalization. Derived sets are computed once
/// during [`Index::build`] and cached for the whole session; they are stored
/// sorted and deduplicated so facet values are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
	pub id: String,
	pub title: String,
	pub artist: String,
	pub release_year: Option<i32>,
	/// Raw tag sequence, kept for display.
	pub tags: Vec<String>,
	/// Canonical tags after slash-splitting and synonym mapping.
	pub normalized_tags: Vec<String>,
	/// Coarse tag set used by the tag facet: descriptors dropped, years
	/// collapsed into decades, pattern buckets applied, label names removed.
	pub filter_tags: Vec<String>,
	pub countries: Vec<String>,
	pub labels: Vec<String>,
	pub genres: Vec<String>,
	pub subgenres: Vec<String>,
	pub moods: Vec<String>,
	/// Searchable but never rendered as a facet.
	pub keywords: Vec<String>,
	pub description: Option<String>,
}

/// A filterable dimension backed by a set of values per song. The year range
/// and the text query are separate filter clauses, not facets.
#[derive(Clone, Copy, Debug, Enum, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
	Tags,
	Countries,
	Artists,
	Labels,
	Genres,
	Subgenres,
	Moods,
}

impl Facet {
	pub const ALL: [Facet; 7] = [
		Facet::Tags,
		Facet::Countries,
		Facet::Artists,
		Facet::Labels,
		Facet::Genres,
		Facet::Subgenres,
		Facet::Moods,
	];

	/// The generic accessor behind every facet clause: filtering and counting
	/// only ever intersect this set with the current selection.
	pub fn values(self, song: &Song) -> &[String] {
		match self {
			Self::Tags => &song.filter_tags,
			Self::Countries => &song.countries,
			Self::Artists => std::slice::from_ref(&song.artist),
			Self::Labels => &song.labels,
			Self::Genres => &song.genres,
			Self::Subgenres => &song.subgenres,
			Self::Moods => &song.moods,
		}
	}
}

/// The normalized catalog. Built once after the catalog fetch, immutable for
/// the rest of the session; only the [`FilterState`] changes between renders.
pub struct Index {
	songs: Vec<Song>,
	config: Config,
}

impl Index {
	pub fn build(raw_songs: Vec<RawSong>, rules: Rules, config: Config) -> Self {
		let normalizer = Normalizer::new(rules);
		let songs = raw_songs
			.iter()
			.map(|raw| normalizer.normalize(raw))
			.collect::<Vec<_>>();
		info!("Indexed {} songs", songs.len());
		Self { songs, config }
	}

	pub fn songs(&self) -> &[Song] {
		&self.songs
	}

	pub fn num_songs(&self) -> usize {
		self.songs.len()
	}

	pub fn config(&self) -> &Config {
		&self.config
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn artist_facet_is_a_one_element_set() {
		let song = Song {
			artist: "Stratovarius".to_owned(),
			..Default::default()
		};
		assert_eq!(Facet::Artists.values(&song), ["Stratovarius".to_owned()]);
	}

	#[test]
	fn tag_facet_reads_filter_tags_not_raw_tags() {
		let song = Song {
			tags: vec!["Acid Trance 1993".to_owned()],
			filter_tags: vec!["1990s".to_owned()],
			..Default::default()
		};
		assert_eq!(Facet::Tags.values(&song), ["1990s".to_owned()]);
	}
}
