use std::fs;
use std::path::Path;

use log::debug;

use crate::cram::BYTES_PER_COLOR;
use crate::cram::dump::{CramError, PaletteCatalog, PaletteDump};

impl PaletteCatalog {
	/// Splits a raw CRAM image into consecutive palettes of `color_count` entries.
	///
	/// A short trailing chunk is kept as-is, so it fails the length check when rendered
	/// instead of being padded or dropped.
	pub fn from_cram_bytes(data: &[u8], color_count: usize) -> Result<PaletteCatalog, CramError> {
		if data.is_empty() {
			return Err(CramError::Empty);
		}

		let palette_size = color_count * BYTES_PER_COLOR;
		if palette_size == 0 {
			return Err(CramError::InvalidLength { expected: 0, actual: data.len() });
		}

		let catalog: PaletteCatalog = data.chunks(palette_size)
			.enumerate()
			.map(|(i, chunk)| PaletteDump::new(format!("[{:x}] PALETTE {i}", i * palette_size), chunk))
			.collect();

		if data.len() % palette_size != 0 {
			debug!("CRAM data ends with a partial palette ({} of {palette_size} bytes)", data.len() % palette_size);
		}

		Ok(catalog)
	}

	pub fn from_cram_file<P: AsRef<Path>>(path: P, color_count: usize) -> Result<PaletteCatalog, CramError> {
		let data = fs::read(&path)?;
		debug!("read {} bytes of CRAM from {}", data.len(), path.as_ref().display());
		Self::from_cram_bytes(&data, color_count)
	}
}
