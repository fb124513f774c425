use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Filesystem error for `{0}`: `{1}`")]
	Io(PathBuf, std::io::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	#[error("Catalog root must be a JSON array")]
	NotAnArray,
}

/// One catalog record as found on disk, before normalization.
///
/// The catalog source makes no schema guarantees beyond the documented
/// fields: `country`, `label`, `genre`, `subgenre` and `keywords` show up as
/// scalars or arrays depending on the record, and any field may be missing
/// outright. Parsing is total per record; unexpected shapes degrade to empty
/// defaults with a logged warning rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSong {
	pub id: String,
	pub title: String,
	pub artist: String,
	pub release_year: Option<i32>,
	pub tags: Vec<String>,
	pub country: Option<String>,
	pub label: Vec<String>,
	pub genre: Vec<String>,
	pub subgenre: Vec<String>,
	pub description: Option<String>,
	pub keywords: Vec<String>,
}

impl RawSong {
	/// Returns `None` only when the record has no usable `id`, which makes
	/// it impossible to reference from the result list.
	pub fn from_value(value: &Value) -> Option<Self> {
		let Some(record) = value.as_object() else {
			warn!("Skipping catalog entry that is not an object: {}", value);
			return None;
		};

		let id = match record.get("id") {
			Some(Value::String(s)) if !s.is_empty() => s.clone(),
			Some(Value::Number(n)) => n.to_string(),
			other => {
				warn!("Skipping catalog entry with no usable id: {:?}", other);
				return None;
			}
		};

		Some(Self {
			title: read_string(record.get("title"), &id, "title"),
			artist: read_string(record.get("artist"), &id, "artist"),
			release_year: read_year(record.get("releaseYear"), &id),
			tags: read_string_list(record.get("tags"), &id, "tags"),
			country: match record.get("country") {
				None | Some(Value::Null) => None,
				Some(Value::String(s)) => Some(s.clone()),
				Some(other) => {
					warn!("Song `{}` has a malformed country: {}", id, other);
					None
				}
			},
			label: read_string_list(record.get("label"), &id, "label"),
			genre: read_string_list(record.get("genre"), &id, "genre"),
			subgenre: read_string_list(record.get("subgenre"), &id, "subgenre"),
			description: record
				.get("description")
				.and_then(Value::as_str)
				.map(str::to_owned),
			keywords: read_string_list(record.get("keywords"), &id, "keywords"),
			id,
		})
	}
}

fn read_string(value: Option<&Value>, id: &str, field: &str) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => {
			warn!("Song `{}` has a malformed {}: {}", id, field, other);
			String::new()
		}
	}
}

/// Accepts a single string or an array of strings. Non-string array entries
/// are dropped individually.
fn read_string_list(value: Option<&Value>, id: &str, field: &str) -> Vec<String> {
	match value {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::String(s)) => vec![s.clone()],
		Some(Value::Array(entries)) => entries
			.iter()
			.filter_map(|entry| match entry {
				Value::String(s) => Some(s.clone()),
				other => {
					warn!("Song `{}` has a malformed {} entry: {}", id, field, other);
					None
				}
			})
			.collect(),
		Some(other) => {
			warn!("Song `{}` has a malformed {}: {}", id, field, other);
			Vec::new()
		}
	}
}

fn read_year(value: Option<&Value>, id: &str) -> Option<i32> {
	match value {
		None | Some(Value::Null) => None,
		Some(Value::Number(n)) => n.as_i64().map(|y| y as i32),
		Some(other) => {
			warn!("Song `{}` has a malformed releaseYear: {}", id, other);
			None
		}
	}
}

/// One-shot catalog fetch. Failure here is fatal to startup.
pub fn read(path: &Path) -> Result<Vec<RawSong>, Error> {
	let bytes = fs::read(path).map_err(|e| Error::Io(path.to_owned(), e))?;
	let root: Value = serde_json::from_slice(&bytes)?;
	parse_root(root)
}

pub fn from_json(json: &str) -> Result<Vec<RawSong>, Error> {
	let root: Value = serde_json::from_str(json)?;
	parse_root(root)
}

fn parse_root(root: Value) -> Result<Vec<RawSong>, Error> {
	let Value::Array(entries) = root else {
		return Err(Error::NotAnArray);
	};
	Ok(entries.iter().filter_map(RawSong::from_value).collect())
}
