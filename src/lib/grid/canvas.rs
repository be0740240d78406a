use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::Builder;

use crate::cram::color::Color;
use crate::grid::font::{glyph, CELL_WIDTH, GLYPH_WIDTH};
use crate::grid::layout::{Point, Rect};
use crate::grid::renderer::RenderError;

const CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
	width: u32,
	height: u32,
	pixels: Vec<u8>,
}

impl Canvas {
	pub fn new(width: u32, height: u32, background: Color) -> Self {
		let pixels = background.to_rgb().repeat(width as usize * height as usize);
		Self { width, height, pixels }
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	pub fn into_pixels(self) -> Vec<u8> {
		self.pixels
	}

	fn offset(&self, x: u32, y: u32) -> Option<usize> {
		if x >= self.width || y >= self.height {
			return None;
		}

		Some((y as usize * self.width as usize + x as usize) * CHANNELS)
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		let i = self.offset(x, y)?;
		Some(Color::from([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]))
	}

	// writes outside the canvas are dropped
	pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
		if let Some(i) = self.offset(x, y) {
			self.pixels[i..i + CHANNELS].copy_from_slice(&color.to_rgb());
		}
	}

	pub fn fill_rect(&mut self, rect: Rect, fill: Color, outline: Option<Color>) {
		for y in rect.top..=rect.bottom {
			for x in rect.left..=rect.right {
				let on_border = x == rect.left || x == rect.right || y == rect.top || y == rect.bottom;
				let color = match outline {
					Some(outline) if on_border => outline,
					_ => fill,
				};
				self.set_pixel(x, y, color);
			}
		}
	}

	/// Draws `text` with its top-left corner at `origin`, each font pixel blown up to `scale`².
	/// Glyphs that would start past the right or bottom edge are skipped.
	pub fn draw_text(&mut self, origin: Point, text: &str, scale: u32, color: Color) {
		let advance = CELL_WIDTH.saturating_mul(scale);

		for (i, ch) in text.chars().enumerate() {
			let x0 = (i as u32).saturating_mul(advance).saturating_add(origin.x);
			if x0 >= self.width || origin.y >= self.height {
				break;
			}

			let Some(bits) = glyph(ch) else {
				continue;
			};

			for (row, &line) in bits.iter().enumerate() {
				for col in 0..GLYPH_WIDTH {
					if line & (0x10 >> col) == 0 {
						continue;
					}

					let x = x0.saturating_add(col.saturating_mul(scale));
					let y = origin.y.saturating_add((row as u32).saturating_mul(scale));
					self.fill_block(x, y, scale, color);
				}
			}
		}
	}

	fn fill_block(&mut self, x: u32, y: u32, size: u32, color: Color) {
		let right = x.saturating_add(size).min(self.width);
		let bottom = y.saturating_add(size).min(self.height);
		for py in y..bottom {
			for px in x..right {
				self.set_pixel(px, py, color);
			}
		}
	}

	pub fn write_png<W: Write>(&self, w: W) -> Result<(), RenderError> {
		if self.width == 0 || self.height == 0 {
			return Err(RenderError::EmptyCanvas);
		}

		let mut encoder = png::Encoder::new(w, self.width, self.height);
		encoder.set_color(png::ColorType::Rgb);
		encoder.set_depth(png::BitDepth::Eight);

		let mut writer = encoder.write_header()?;
		writer.write_image_data(&self.pixels)?;
		writer.finish()?;
		Ok(())
	}

	/// Writes the PNG next to `path` first and moves it into place once complete.
	pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
		if self.width == 0 || self.height == 0 {
			return Err(RenderError::EmptyCanvas);
		}

		let path = path.as_ref();
		let dir = match path.parent() {
			Some(p) if !p.as_os_str().is_empty() => p,
			_ => Path::new("."),
		};

		let mut temp_file = Builder::new()
			.prefix(".cramview")
			.suffix(".png")
			.tempfile_in(dir)?;

		{
			let f: &mut File = temp_file.as_file_mut();
			let mut w = BufWriter::new(f);
			self.write_png(&mut w)?;
			w.flush()?;
		}

		temp_file.persist(path).map_err(|e| RenderError::IoErr(e.error))?;
		debug!("PNG file written: {}", path.display());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outline_and_fill() {
		let mut canvas = Canvas::new(8, 8, Color::BLACK);
		let red = Color::from([0xFF, 0, 0]);
		canvas.fill_rect(Rect { left: 1, top: 1, right: 4, bottom: 4 }, red, Some(Color::WHITE));

		assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
		assert_eq!(canvas.pixel(4, 2), Some(Color::WHITE));
		assert_eq!(canvas.pixel(2, 2), Some(red));
		assert_eq!(canvas.pixel(3, 3), Some(red));
		assert_eq!(canvas.pixel(5, 5), Some(Color::BLACK));
		assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
	}

	#[test]
	fn drawing_clips_at_edges() {
		let mut canvas = Canvas::new(4, 4, Color::BLACK);
		canvas.fill_rect(Rect { left: 2, top: 2, right: 10, bottom: 10 }, Color::WHITE, None);

		assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
		assert_eq!(canvas.pixel(4, 4), None);
		assert_eq!(canvas.pixels().len(), 4 * 4 * 3);
	}

	#[test]
	fn text_uses_scaled_glyph_cells() {
		let mut canvas = Canvas::new(40, 30, Color::BLACK);
		// '[' top row is .###.
		canvas.draw_text(Point { x: 2, y: 3 }, "[", 2, Color::WHITE);

		assert_eq!(canvas.pixel(2, 3), Some(Color::BLACK));
		assert_eq!(canvas.pixel(4, 3), Some(Color::WHITE));
		assert_eq!(canvas.pixel(5, 4), Some(Color::WHITE));
		assert_eq!(canvas.pixel(9, 4), Some(Color::WHITE));
		assert_eq!(canvas.pixel(10, 3), Some(Color::BLACK));
	}

	#[test]
	fn huge_text_scale_is_clipped() {
		let mut canvas = Canvas::new(10, 10, Color::BLACK);
		// '%' has its top-left pixel set, so one scaled font pixel covers the whole canvas
		canvas.draw_text(Point { x: 0, y: 0 }, "%%%", u32::MAX, Color::WHITE);
		assert!(canvas.pixels().iter().all(|&b| b == 0xFF));

		let mut canvas = Canvas::new(10, 10, Color::BLACK);
		canvas.draw_text(Point { x: u32::MAX - 1, y: u32::MAX - 1 }, "%", 1_000_000_000, Color::WHITE);
		assert!(canvas.pixels().iter().all(|&b| b == 0));
	}

	#[test]
	fn empty_canvas_has_no_png() {
		let canvas = Canvas::new(764, 0, Color::BLACK);
		let err = canvas.write_png(Vec::new()).unwrap_err();
		assert!(matches!(err, RenderError::EmptyCanvas));
	}
}
