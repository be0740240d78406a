use anyhow::{Context, Result};
use log::debug;

use crate::commands::{SourceArgs, StyleArgs};
use cramview_rs::cram::color::Color;
use cramview_rs::cram::dump::PaletteCatalog;
use cramview_rs::cram::reference::reference_catalog;
use cramview_rs::grid::layout::Geometry;
use cramview_rs::grid::renderer::RenderConfig;

/// Parses `RRGGBB`, with an optional `#` or `0x` prefix.
pub(crate) fn parse_hex_color(s: &str) -> Result<Color, String> {
	let trimmed = s.trim();
	let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
	let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

	if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(format!("\"{s}\" is not a RRGGBB color"));
	}

	u32::from_str_radix(stripped, 16)
		.map(Color::from)
		.map_err(|e| format!("\"{s}\": {e}"))
}

/// Loads the catalog named on the command line, falling back to the built-in reference dumps.
pub(crate) fn load_catalog(source: &SourceArgs) -> Result<PaletteCatalog> {
	let catalog = if let Some(path) = &source.catalog {
		PaletteCatalog::from_json_file(path)
			.with_context(|| format!("Couldn't load catalog {}", path.display()))?
	} else if let Some(path) = &source.cram {
		PaletteCatalog::from_cram_file(path, source.colors_per_dump)
			.with_context(|| format!("Couldn't load CRAM dump {}", path.display()))?
	} else {
		reference_catalog()
	};

	debug!("catalog has {} dumps", catalog.len());
	Ok(catalog)
}

pub(crate) fn render_config(style: &StyleArgs, colors_per_dump: usize) -> RenderConfig {
	RenderConfig {
		geometry: Geometry {
			tile_size: style.tile_size,
			..Geometry::default()
		},
		colors_per_dump,
		font_scale: style.font_scale,
		outline: style.outline,
		background: style.background,
		..RenderConfig::default()
	}
}
