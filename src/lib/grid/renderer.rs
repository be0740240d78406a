use std::fmt::{Display, Formatter};

use log::{debug, warn};

use crate::cram::color::Color;
use crate::cram::dump::{CramError, PaletteCatalog};
use crate::cram::COLORS_PER_DUMP;
use crate::grid::canvas::Canvas;
use crate::grid::font::text_width;
use crate::grid::layout::{Geometry, GridLayout};

pub const MAX_FONT_SCALE: u32 = 64;
// 3 bytes per pixel, so this caps the pixel buffer at 768 MiB
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
	pub geometry: Geometry,
	pub colors_per_dump: usize,
	pub font_scale: u32,
	pub outline: Color,
	pub label_color: Color,
	pub background: Color,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			geometry: Geometry::default(),
			colors_per_dump: COLORS_PER_DUMP,
			font_scale: 3,
			outline: Color::WHITE,
			label_color: Color::WHITE,
			background: Color::BLACK,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct GridRenderer {
	config: RenderConfig,
}

impl GridRenderer {
	pub fn new(config: RenderConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	pub fn layout(&self, catalog: &PaletteCatalog) -> GridLayout {
		GridLayout::new(self.config.geometry, catalog.len(), self.config.colors_per_dump)
	}

	/// All dumps are decoded before anything is painted; the first one with a bad length aborts
	/// the render and is reported by index and label.
	pub fn render(&self, catalog: &PaletteCatalog) -> Result<Canvas, RenderError> {
		let cfg = &self.config;
		if !(1..=MAX_FONT_SCALE).contains(&cfg.font_scale) {
			return Err(RenderError::InvalidFontScale(cfg.font_scale));
		}

		let palettes = catalog.iter().enumerate().map(|(index, dump)| {
			dump.decode(cfg.colors_per_dump).map_err(|source| RenderError::InvalidDump {
				index,
				label: dump.label.clone(),
				source,
			})
		}).collect::<Result<Vec<Vec<Color>>, RenderError>>()?;

		let layout = self.layout(catalog);
		let too_large = RenderError::CanvasTooLarge { width: layout.width(), height: layout.height() };
		if layout.width().checked_mul(layout.height()).is_none_or(|pixels| pixels > MAX_CANVAS_PIXELS) {
			return Err(too_large);
		}
		let (Ok(width), Ok(height)) = (u32::try_from(layout.width()), u32::try_from(layout.height())) else {
			return Err(too_large);
		};

		let mut canvas = Canvas::new(width, height, cfg.background);
		for (i, (dump, colors)) in catalog.iter().zip(&palettes).enumerate() {
			for (j, color) in colors.iter().enumerate() {
				canvas.fill_rect(layout.swatch(i, j), *color, Some(cfg.outline));
			}

			let anchor = layout.label_anchor(i);
			if anchor.x as u64 + text_width(&dump.label, cfg.font_scale) > width as u64 {
				warn!("label \"{}\" does not fit the canvas and will be clipped", dump.label);
			}
			canvas.draw_text(anchor, &dump.label, cfg.font_scale, cfg.label_color);

			debug!("painted {} ({} colors)", dump.label, colors.len());
		}

		Ok(canvas)
	}
}

#[derive(Debug)]
pub enum RenderError {
	EmptyCanvas,
	InvalidFontScale(u32),
	InvalidDump { index: usize, label: String, source: CramError },
	CanvasTooLarge { width: u64, height: u64 },
	PngErr(png::EncodingError),
	IoErr(std::io::Error),
}

impl Display for RenderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			RenderError::EmptyCanvas => write!(f, "Can't encode an image with no pixels"),
			RenderError::InvalidFontScale(scale) => write!(f, "Font scale {scale} is outside 1..={MAX_FONT_SCALE}"),
			RenderError::InvalidDump { index, label, source } => write!(f, "Dump {index} (\"{label}\") is invalid: {source}"),
			RenderError::CanvasTooLarge { width, height } => write!(f, "A {width}x{height} canvas is too large"),
			RenderError::PngErr(e) => write!(f, "png error: {e}"),
			RenderError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for RenderError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			RenderError::InvalidDump { source, .. } => Some(source),
			RenderError::PngErr(e) => Some(e),
			RenderError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<png::EncodingError> for RenderError {
	fn from(e: png::EncodingError) -> Self {
		RenderError::PngErr(e)
	}
}

impl From<std::io::Error> for RenderError {
	fn from(e: std::io::Error) -> Self {
		RenderError::IoErr(e)
	}
}
