/// Fixed pixel measurements of the swatch grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
	pub tile_size: u32,
	pub hspace: u32,
	pub vspace: u32,
	/// Vertical offset of the label text from the top of its row unit.
	pub label_shift: u32,
	pub left_padding: u32,
	pub right_padding: u32,
}

impl Default for Geometry {
	fn default() -> Self {
		Self {
			tile_size: 32,
			hspace: 2,
			vspace: 15,
			label_shift: 10,
			left_padding: 20,
			right_padding: 200,
		}
	}
}

impl Geometry {
	fn column_pitch(&self) -> u64 {
		self.tile_size as u64 + self.hspace as u64
	}

	fn row_pitch(&self) -> u64 {
		self.tile_size as u64 + self.vspace as u64
	}
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Point {
	pub x: u32,
	pub y: u32,
}

/// Rectangle with inclusive corners.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Rect {
	pub left: u32,
	pub top: u32,
	pub right: u32,
	pub bottom: u32,
}

/// Placement of every swatch and label for a catalog of `dump_count` palettes.
///
/// Each dump takes two row units stacked vertically: the label row, then the swatch row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
	geometry: Geometry,
	dump_count: usize,
	colors_per_dump: usize,
}

impl GridLayout {
	pub fn new(geometry: Geometry, dump_count: usize, colors_per_dump: usize) -> Self {
		Self {
			geometry,
			dump_count,
			colors_per_dump,
		}
	}

	pub fn geometry(&self) -> &Geometry {
		&self.geometry
	}

	pub fn dump_count(&self) -> usize {
		self.dump_count
	}

	pub fn colors_per_dump(&self) -> usize {
		self.colors_per_dump
	}

	pub fn width(&self) -> u64 {
		let g = &self.geometry;
		self.colors_per_dump as u64 * g.column_pitch() + g.left_padding as u64 + g.right_padding as u64
	}

	pub fn height(&self) -> u64 {
		self.dump_count as u64 * 2 * self.geometry.row_pitch()
	}

	// coordinates only fit in u32 once width() and height() do
	pub fn swatch(&self, dump: usize, color: usize) -> Rect {
		let g = &self.geometry;
		let left = g.left_padding as u64 + color as u64 * g.column_pitch();
		let top = (2 * dump as u64 + 1) * g.row_pitch();

		Rect {
			left: left as u32,
			top: top as u32,
			right: (left + g.tile_size as u64) as u32,
			bottom: (top + g.tile_size as u64) as u32,
		}
	}

	pub fn label_anchor(&self, dump: usize) -> Point {
		let g = &self.geometry;
		Point {
			x: g.left_padding,
			y: (2 * dump as u64 * g.row_pitch() + g.label_shift as u64) as u32,
		}
	}
}
