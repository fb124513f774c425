use std::collections::BTreeSet;

use regex::Regex;

use crate::catalog::RawSong;

use super::{Rules, Song};

/// Reduces a raw string to the form used for synonym and descriptor lookups:
/// lowercase, `&` spelled out as "and", punctuation stripped, whitespace
/// collapsed.
pub fn canonical_key(raw: &str) -> String {
	let mut cleaned = String::with_capacity(raw.len());
	for c in raw.chars() {
		if c == '&' {
			cleaned.push_str(" and ");
		} else if c.is_alphanumeric() {
			cleaned.extend(c.to_lowercase());
		} else {
			cleaned.push(' ');
		}
	}
	cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turns raw catalog records into [`Song`]s with canonical facet values.
///
/// Normalization is pure and total: malformed input degrades to empty sets,
/// and running a normalized record through again yields the same derived
/// sets.
pub struct Normalizer {
	rules: Rules,
	year_token: Regex,
	parenthetical: Regex,
	licensing: Regex,
}

impl Normalizer {
	pub fn new(rules: Rules) -> Self {
		Self {
			rules,
			// Years outside 1900-2099 are left alone
			year_token: Regex::new(r"\b(19|20)\d{2}\b").unwrap(),
			parenthetical: Regex::new(r"\([^)]*\)").unwrap(),
			licensing: Regex::new(r"(?i)licensed\s+to").unwrap(),
		}
	}

	pub fn normalize(&self, raw: &RawSong) -> Song {
		let normalized_tags = self.normalize_tags(&raw.tags);
		let countries = match &raw.country {
			Some(country) => self.normalize_tags(std::slice::from_ref(country)),
			None => BTreeSet::new(),
		};
		let labels = self.parse_labels(&raw.label);
		let filter_tags = self.filter_tags(&normalized_tags, &labels);
		let moods = self.infer_moods(raw.description.as_deref(), &normalized_tags, &raw.subgenre);

		Song {
			id: raw.id.clone(),
			title: raw.title.clone(),
			artist: raw.artist.clone(),
			release_year: raw.release_year,
			tags: raw.tags.clone(),
			normalized_tags: normalized_tags.into_iter().collect(),
			filter_tags: filter_tags.into_iter().collect(),
			countries: countries.into_iter().collect(),
			labels: labels.into_iter().collect(),
			genres: raw.genre.clone(),
			subgenres: raw.subgenre.clone(),
			moods: moods.into_iter().collect(),
			keywords: raw.keywords.clone(),
			description: raw.description.clone(),
		}
	}

	/// Splits slash-combined values and maps each part through the synonym
	/// table. Unmapped parts keep their original spelling.
	fn normalize_tags(&self, raw_tags: &[String]) -> BTreeSet<String> {
		raw_tags
			.iter()
			.flat_map(|tag| tag.split('/'))
			.map(str::trim)
			.filter(|part| !part.is_empty())
			.map(|part| self.canonicalize(part))
			.collect()
	}

	fn canonicalize(&self, part: &str) -> String {
		let key = canonical_key(part);
		match self.rules.synonyms.get(&key) {
			Some(canonical) => canonical.clone(),
			None => part.to_owned(),
		}
	}

	/// `"Warner (UK) / Licensed to Sony"` parses to `{"Warner", "Sony"}`.
	fn parse_labels(&self, raw_labels: &[String]) -> BTreeSet<String> {
		raw_labels
			.iter()
			.flat_map(|entry| entry.split(['/', ',']))
			.filter_map(|part| {
				let part = self.parenthetical.replace_all(part, "");
				let part = self.licensing.replace_all(&part, "");
				let part = part.trim();
				match part.is_empty() {
					true => None,
					false => Some(part.to_owned()),
				}
			})
			.collect()
	}

	/// Derives the coarse tag set used by the tag facet.
	fn filter_tags(
		&self,
		normalized_tags: &BTreeSet<String>,
		labels: &BTreeSet<String>,
	) -> BTreeSet<String> {
		let mut filter_tags = BTreeSet::new();

		for tag in normalized_tags {
			let key = canonical_key(tag);

			if key
				.split(' ')
				.any(|word| self.rules.mix_descriptors.iter().any(|d| d == word))
			{
				continue;
			}

			// A dated tag collapses into its decade and nothing else
			if let Some(year) = self.year_token.find(&key) {
				if let Ok(year) = year.as_str().parse::<i32>() {
					filter_tags.insert(format!("{}s", (year / 10) * 10));
				}
				continue;
			}

			let mut bucketed = false;
			for (bucket, patterns) in &self.rules.tag_buckets {
				if patterns.iter().any(|p| key.contains(p.as_str())) {
					filter_tags.insert(bucket.clone());
					bucketed = true;
				}
			}
			if !bucketed {
				filter_tags.insert(tag.clone());
			}
		}

		// Label identity never duplicates as a tag facet value
		let label_keys = labels.iter().map(|l| l.to_lowercase()).collect::<Vec<_>>();
		filter_tags.retain(|tag| {
			let tag = tag.to_lowercase();
			!label_keys.iter().any(|label| tag.contains(label.as_str()))
		});

		filter_tags
	}

	/// Best-effort keyword scan, not authoritative.
	fn infer_moods(
		&self,
		description: Option<&str>,
		normalized_tags: &BTreeSet<String>,
		subgenres: &[String],
	) -> BTreeSet<String> {
		let mut haystack = String::new();
		if let Some(description) = description {
			haystack.push_str(description);
			haystack.push(' ');
		}
		for tag in normalized_tags {
			haystack.push_str(tag);
			haystack.push(' ');
		}
		for subgenre in subgenres {
			haystack.push_str(subgenre);
			haystack.push(' ');
		}
		let haystack = haystack.to_lowercase();

		self.rules
			.mood_keywords
			.iter()
			.filter(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k.as_str())))
			.map(|(mood, _)| mood.clone())
			.collect()
	}
}
