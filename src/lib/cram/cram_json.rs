use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::cram::dump::{CramError, PaletteCatalog, PaletteDump};
use crate::cram::hex::parse_hex_bytes;

#[derive(Deserialize, Debug)]
struct JsonDump {
	label: String,
	data: String,
}

// [{"label": "[7b2c4] YELLOW SHADES", "data": "00 00 00 22 ..."}, ...]
impl PaletteCatalog {
	fn from_json_internal<R: Read>(reader: R) -> Result<PaletteCatalog, CramError> {
		let entries: Vec<JsonDump> = serde_json::from_reader(reader)
			.map_err(|_| CramError::InvalidFile)?;

		entries.into_iter().enumerate().map(|(i, entry)| {
			let raw = parse_hex_bytes(&entry.data)
				.map_err(|msg| CramError::InvalidJsonEntry { index: i, msg })?;

			Ok(PaletteDump::new(entry.label, raw))
		}).collect()
	}

	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<PaletteCatalog, CramError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_json_internal(reader)
	}

	pub fn from_json_string<S: Into<String>>(s: S) -> Result<PaletteCatalog, CramError> {
		let s = s.into();
		Self::from_json_internal(s.as_bytes())
	}
}
