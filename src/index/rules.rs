use std::collections::HashMap;

/// Normalization rules consumed by the [`Normalizer`](super::Normalizer).
///
/// All rules are plain data so they can be tested and extended without
/// touching the normalization control flow. [`Rules::default`] provides the
/// built-in tables.
pub struct Rules {
	/// Canonical spellings for known textual variants. Keys are stored in
	/// canonical form (see [`super::canonical_key`]).
	pub synonyms: HashMap<String, String>,
	/// Coarse bucket name -> substring patterns. A tag containing any
	/// pattern contributes that bucket to the song's filter-tags. One tag
	/// may hit several buckets.
	pub tag_buckets: Vec<(String, Vec<String>)>,
	/// Tags made of mix/edit/version vocabulary are dropped from the
	/// filter-tag set. Entries are single canonical-form words.
	pub mix_descriptors: Vec<String>,
	/// Mood category -> keywords scanned over description, tags and
	/// subgenres.
	pub mood_keywords: Vec<(String, Vec<String>)>,
}

impl Default for Rules {
	fn default() -> Self {
		Self {
			synonyms: make_table(&[
				("uk", "UK"),
				("united kingdom", "UK"),
				("great britain", "UK"),
				("england", "UK"),
				("usa", "USA"),
				("united states", "USA"),
				("united states of america", "USA"),
				("america", "USA"),
				("germany", "Germany"),
				("deutschland", "Germany"),
				("netherlands", "Netherlands"),
				("the netherlands", "Netherlands"),
				("holland", "Netherlands"),
				("belgium", "Belgium"),
				("france", "France"),
				("italy", "Italy"),
				("italia", "Italy"),
				("spain", "Spain"),
				("sweden", "Sweden"),
				("japan", "Japan"),
			]),
			tag_buckets: make_list_table(&[
				("trance", &["trance"]),
				("house", &["house"]),
				("techno", &["techno"]),
				("ambient", &["ambient", "downtempo", "chillout"]),
				("hardcore", &["hardcore", "gabber"]),
				("breakbeat", &["breakbeat", "breaks", "big beat"]),
				("drum and bass", &["drum and bass", "dnb", "jungle"]),
				("disco", &["disco", "italo"]),
				("eurodance", &["eurodance", "hands up"]),
			]),
			mix_descriptors: [
				"mix", "remix", "edit", "reedit", "version", "dub", "radio", "extended",
				"instrumental", "rework", "bootleg",
			]
			.iter()
			.map(|s| s.to_string())
			.collect(),
			mood_keywords: make_list_table(&[
				(
					"energetic",
					&["energetic", "uplifting", "driving", "euphoric", "anthem", "banger"],
				),
				(
					"melancholic",
					&["melancholic", "melancholy", "sad", "wistful", "longing", "bittersweet"],
				),
				("dark", &["dark", "brooding", "ominous", "sinister", "gloomy"]),
				(
					"dreamy",
					&["dreamy", "ethereal", "atmospheric", "hypnotic", "floating"],
				),
				("romantic", &["love", "romantic", "sensual", "tender"]),
				("chill", &["chill", "relaxed", "mellow", "laidback", "smooth"]),
			]),
		}
	}
}

fn make_table(entries: &[(&str, &str)]) -> HashMap<String, String> {
	entries
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

fn make_list_table(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
	entries
		.iter()
		.map(|(name, words)| {
			(
				name.to_string(),
				words.iter().map(|w| w.to_string()).collect(),
			)
		})
		.collect()
}
