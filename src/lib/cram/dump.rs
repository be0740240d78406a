use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::cram::color::{decode, decode_words, Color, CramWord};

/// A labeled CRAM snapshot: `2 * N` raw bytes for an `N`-color palette.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PaletteDump {
	pub label: String,
	pub raw: Vec<u8>,
}

impl PaletteDump {
	pub fn new<S: Into<String>, B: Into<Vec<u8>>>(label: S, raw: B) -> Self {
		Self {
			label: label.into(),
			raw: raw.into(),
		}
	}

	pub fn decode(&self, color_count: usize) -> Result<Vec<Color>, CramError> {
		decode(&self.raw, color_count)
	}

	pub fn words(&self, color_count: usize) -> Result<Vec<CramWord>, CramError> {
		decode_words(&self.raw, color_count)
	}
}

/// Ordered, read-only list of dumps. Order is the top-to-bottom order of the rendered grid.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PaletteCatalog {
	dumps: Vec<PaletteDump>,
}

impl PaletteCatalog {
	pub fn dumps(&self) -> &[PaletteDump] {
		&self.dumps
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PaletteDump> {
		self.dumps.iter()
	}

	pub fn len(&self) -> usize {
		self.dumps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dumps.is_empty()
	}

	fn guess_format<P: AsRef<Path>>(path: P) -> Option<CatalogFormat> {
		let ext = path.as_ref()
			.extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"bin" => Some(CatalogFormat::Cram),
			"json" => Some(CatalogFormat::Json),
			_ => None,
		}
	}

	/// Loads a catalog, picking the format from the file extension.
	pub fn load_from_file<P: AsRef<Path>>(path: P, color_count: usize) -> Result<PaletteCatalog, CramError> {
		match Self::guess_format(&path) {
			Some(CatalogFormat::Cram) => Self::from_cram_file(&path, color_count),
			Some(CatalogFormat::Json) => Self::from_json_file(&path),
			None => Err(CramError::InvalidFile),
		}
	}
}

impl From<Vec<PaletteDump>> for PaletteCatalog {
	fn from(dumps: Vec<PaletteDump>) -> Self {
		Self { dumps }
	}
}

impl FromIterator<PaletteDump> for PaletteCatalog {
	fn from_iter<I: IntoIterator<Item = PaletteDump>>(iter: I) -> Self {
		Self { dumps: iter.into_iter().collect() }
	}
}

impl<'a> IntoIterator for &'a PaletteCatalog {
	type Item = &'a PaletteDump;
	type IntoIter = std::slice::Iter<'a, PaletteDump>;

	fn into_iter(self) -> Self::IntoIter {
		self.dumps.iter()
	}
}

#[derive(Debug)]
pub enum CramError {
	InvalidLength { expected: usize, actual: usize },
	Empty,
	InvalidFile,
	InvalidJsonEntry { index: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for CramError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CramError::InvalidLength { expected, actual } => write!(f, "Dump is {actual} bytes long, expected {expected}"),
			CramError::Empty => write!(f, "The dump file is empty"),
			CramError::InvalidFile => write!(f, "Invalid file"),
			CramError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
			CramError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for CramError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			CramError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for CramError {
	fn from(e: std::io::Error) -> Self {
		CramError::IoErr(e)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CatalogFormat {
	Cram, // .bin
	Json, // .json
}

impl Display for CatalogFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CatalogFormat::Cram => write!(f, "bin"),
			CatalogFormat::Json => write!(f, "json"),
		}
	}
}
