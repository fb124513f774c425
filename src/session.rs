use log::debug;

use crate::index::{sort_songs, Facet, FilterState, Index, Song, SortKey};

/// The presentation adapter boundary. The adapter renders whatever it is
/// handed and calls back into [`Session`] on every user intent; it never
/// filters or counts on its own.
pub trait Renderer {
	fn render(&mut self, songs: &[&Song]);
	fn render_facet(&mut self, facet: Facet, options: &[(String, usize)]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearBound {
	Min,
	Max,
}

/// One user's browsing session: the immutable catalog index plus the single
/// mutable filter-state record. Intents are synchronous and run to
/// completion; each one replaces the state wholesale and should be followed
/// by a [`Session::refresh`] so the adapter sees updated results and counts.
pub struct Session {
	index: Index,
	state: FilterState,
}

impl Session {
	pub fn new(index: Index) -> Self {
		Self {
			index,
			state: FilterState::default(),
		}
	}

	pub fn index(&self) -> &Index {
		&self.index
	}

	pub fn state(&self) -> &FilterState {
		&self.state
	}

	pub fn set_facet_selection(&mut self, facet: Facet, values: impl IntoIterator<Item = String>) {
		self.state = self
			.state
			.with_selection(facet, values.into_iter().collect());
	}

	pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) {
		debug!("Toggling {:?} value `{}`", facet, value);
		let selection = self.state.toggled(facet, value);
		self.state = self.state.with_selection(facet, selection);
	}

	/// `None` unsets the bound, mirroring a cleared or unparseable input
	/// field.
	pub fn set_year_bound(&mut self, bound: YearBound, year: Option<i32>) {
		let mut state = self.state.clone();
		match bound {
			YearBound::Min => state.year_min = year,
			YearBound::Max => state.year_max = year,
		}
		self.state = state;
	}

	/// Surrounding whitespace is not part of the query.
	pub fn set_text_query(&mut self, query: &str) {
		let mut state = self.state.clone();
		state.text_query = query.trim().to_owned();
		self.state = state;
	}

	pub fn set_sort(&mut self, key: SortKey, ascending: bool) {
		let mut state = self.state.clone();
		state.sort_key = key;
		state.ascending = ascending;
		self.state = state;
	}

	/// Back to a blank panel: no selections, no bounds, no query, title
	/// ascending.
	pub fn clear_all(&mut self) {
		self.state = FilterState::default();
	}

	/// The current result sequence: evaluated against the live state, then
	/// sorted.
	pub fn results(&self) -> Vec<&Song> {
		let mut songs = self.index.evaluate(&self.state);
		sort_songs(&mut songs, self.state.sort_key, self.state.ascending);
		songs
	}

	/// Pushes the current results and every facet's option counts through
	/// the adapter.
	pub fn refresh(&self, renderer: &mut dyn Renderer) {
		renderer.render(&self.results());
		for facet in Facet::ALL {
			let options = self.index.option_counts(facet, &self.state);
			renderer.render_facet(facet, &options);
		}
	}
}
