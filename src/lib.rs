//! Faceted filtering and dynamic facet-count engine for a static song
//! catalog.
//!
//! The catalog is fetched once ([`catalog`]), normalized once into canonical
//! facet values ([`index`]), and immutable for the rest of the session. A
//! [`session::Session`] holds the one mutable piece, the
//! [`index::FilterState`], and answers every user intent synchronously:
//! evaluate the combined predicate, sort stably, and compute per-option
//! "what if I clicked this" counts for the presentation adapter.

pub mod catalog;
pub mod config;
pub mod index;
pub mod logging;
pub mod session;

pub use catalog::RawSong;
pub use config::Config;
pub use index::{Facet, FilterState, Index, Rules, Song, SortKey};
pub use session::{Renderer, Session, YearBound};

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Catalog(#[from] catalog::Error),
	#[error(transparent)]
	Config(#[from] config::Error),
	#[error(transparent)]
	Logging(#[from] logging::Error),
}
