use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{
	ColorChoice, CombinedLogger, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Filesystem error for `{0}`: `{1}`")]
	Io(PathBuf, std::io::Error),
	#[error(transparent)]
	Logger(#[from] log::SetLoggerError),
}

/// Host-side logger setup. The library itself only emits through the `log`
/// facade.
pub fn init(level: LevelFilter, log_file_path: Option<&Path>) -> Result<(), Error> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
		level,
		simplelog::Config::default(),
		TerminalMode::Mixed,
		ColorChoice::Auto,
	)];

	if let Some(path) = log_file_path {
		let file = File::create(path).map_err(|e| Error::Io(path.to_owned(), e))?;
		loggers.push(WriteLogger::new(
			level,
			simplelog::Config::default(),
			file,
		));
	}

	CombinedLogger::init(loggers)?;
	Ok(())
}
