use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Filesystem error for `{0}`: `{1}`")]
	Io(PathBuf, std::io::Error),
	#[error(transparent)]
	Toml(#[from] toml::de::Error),
}

/// Deployment policies that observed variants of this system disagree on.
/// Pick one per deployment instead of diverging silently per facet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// When true, facet option counts include the active text query, so a
	/// count answers "what would I see if I clicked this now". When false,
	/// counts describe the catalog as filtered by checkboxes and year range
	/// alone.
	pub count_respects_text_query: bool,
	/// When true, facet options whose toggled count is zero are omitted
	/// from the rendered list.
	pub hide_zero_count_options: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			count_respects_text_query: true,
			hide_zero_count_options: false,
		}
	}
}

impl Config {
	pub fn from_path(path: &Path) -> Result<Self, Error> {
		let text = fs::read_to_string(path).map_err(|e| Error::Io(path.to_owned(), e))?;
		Ok(toml::from_str(&text)?)
	}
}
