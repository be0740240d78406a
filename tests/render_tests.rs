use std::fs::File;
use std::path::Path;

use cramview_rs::cram::color::Color;
use cramview_rs::cram::dump::{PaletteCatalog, PaletteDump};
use cramview_rs::cram::reference::reference_catalog;
use cramview_rs::grid::canvas::Canvas;
use cramview_rs::grid::layout::Geometry;
use cramview_rs::grid::renderer::{GridRenderer, RenderConfig, RenderError};

fn center(canvas: &Canvas, left: u32, top: u32) -> Option<Color> {
	canvas.pixel(left + 16, top + 16)
}

fn read_png(path: &Path) -> (png::OutputInfo, Vec<u8>) {
	let decoder = png::Decoder::new(File::open(path).unwrap());
	let mut reader = decoder.read_info().unwrap();
	let mut buf = vec![0; reader.output_buffer_size()];
	let info = reader.next_frame(&mut buf).unwrap();
	buf.truncate(info.buffer_size());
	(info, buf)
}

#[test]
fn reference_canvas_size() {
	let canvas = GridRenderer::default().render(&reference_catalog()).unwrap();

	assert_eq!(canvas.width(), 764);
	assert_eq!(canvas.height(), 846);
	assert_eq!(canvas.pixels().len(), 764 * 846 * 3);
}

#[test]
fn swatches_are_filled_and_outlined() {
	let canvas = GridRenderer::default().render(&reference_catalog()).unwrap();

	// [7b2c4] YELLOW SHADES, color 1
	assert_eq!(center(&canvas, 54, 47), Some(Color { r: 36, g: 36, b: 0 }));
	assert_eq!(canvas.pixel(54, 47), Some(Color::WHITE));
	assert_eq!(canvas.pixel(86, 79), Some(Color::WHITE));
	// gap between two swatches and the right padding stay clear
	assert_eq!(canvas.pixel(53, 63), Some(Color::BLACK));
	assert_eq!(canvas.pixel(700, 63), Some(Color::BLACK));

	// [7b344] RAINBOW 0, color 1
	assert_eq!(center(&canvas, 54, 423), Some(Color { r: 109, g: 146, b: 255 }));
	// [7b3c4] WHITE AND RED SHADES, colors 7 and 8
	assert_eq!(center(&canvas, 258, 799), Some(Color::WHITE));
	assert_eq!(center(&canvas, 292, 799), Some(Color { r: 73, g: 0, b: 0 }));
}

#[test]
fn labels_are_drawn_at_anchor() {
	let canvas = GridRenderer::default().render(&reference_catalog()).unwrap();

	// first glyph is '[', whose top row is .###.
	assert_eq!(canvas.pixel(20, 10), Some(Color::BLACK));
	assert_eq!(canvas.pixel(23, 10), Some(Color::WHITE));
	assert_eq!(canvas.pixel(29, 12), Some(Color::WHITE));
	// nothing above the label
	assert_eq!(canvas.pixel(23, 9), Some(Color::BLACK));
}

#[test]
fn custom_config() {
	let config = RenderConfig {
		geometry: Geometry {
			tile_size: 4,
			hspace: 1,
			vspace: 1,
			label_shift: 0,
			left_padding: 2,
			right_padding: 3,
		},
		colors_per_dump: 2,
		font_scale: 1,
		outline: Color::from(0x808080),
		background: Color::from(0x102030),
		..RenderConfig::default()
	};
	let catalog = PaletteCatalog::from(vec![PaletteDump::new("", [0x00, 0x0E, 0x0E, 0x00])]);
	let canvas = GridRenderer::new(config).render(&catalog).unwrap();

	assert_eq!((canvas.width(), canvas.height()), (2 * 5 + 2 + 3, 2 * 5));
	assert_eq!(canvas.pixel(0, 0), Some(Color::from(0x102030)));
	assert_eq!(canvas.pixel(2, 5), Some(Color::from(0x808080)));
	assert_eq!(canvas.pixel(4, 7), Some(Color { r: 255, g: 0, b: 0 }));
	assert_eq!(canvas.pixel(9, 7), Some(Color { r: 0, g: 0, b: 255 }));
}

#[test]
fn bad_dump_aborts_render() {
	let mut dumps = reference_catalog().dumps().to_vec();
	dumps[1] = PaletteDump::new("SHORT", vec![0_u8; 31]);

	let err = GridRenderer::default().render(&PaletteCatalog::from(dumps)).unwrap_err();
	assert!(matches!(&err, RenderError::InvalidDump { index: 1, label, .. } if label == "SHORT"));
	assert_eq!(err.to_string(), "Dump 1 (\"SHORT\") is invalid: Dump is 31 bytes long, expected 32");
}

#[test]
fn empty_catalog_renders_zero_rows() {
	let canvas = GridRenderer::default().render(&PaletteCatalog::default()).unwrap();
	assert_eq!((canvas.width(), canvas.height()), (764, 0));
	assert!(canvas.pixels().is_empty());

	let dir = tempfile::tempdir().unwrap();
	let err = canvas.save_png(dir.path().join("empty.png")).unwrap_err();
	assert!(matches!(err, RenderError::EmptyCanvas));
	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn font_scale_out_of_range() {
	for font_scale in [0, 65, 1_000_000_000] {
		let renderer = GridRenderer::new(RenderConfig { font_scale, ..RenderConfig::default() });
		let err = renderer.render(&reference_catalog()).unwrap_err();
		assert!(matches!(err, RenderError::InvalidFontScale(s) if s == font_scale));
	}

	let renderer = GridRenderer::new(RenderConfig { font_scale: 64, ..RenderConfig::default() });
	let canvas = renderer.render(&reference_catalog()).unwrap();
	assert_eq!((canvas.width(), canvas.height()), (764, 846));
}

#[test]
fn oversized_canvas_is_rejected() {
	let renderer = GridRenderer::new(RenderConfig {
		geometry: Geometry { tile_size: 200_000, ..Geometry::default() },
		..RenderConfig::default()
	});

	let err = renderer.render(&reference_catalog()).unwrap_err();
	assert!(matches!(err, RenderError::CanvasTooLarge { width: 3_200_380, height: 3_600_180 }));
}

#[test]
fn render_is_repeatable() {
	let renderer = GridRenderer::default();
	let catalog = reference_catalog();
	assert_eq!(renderer.render(&catalog).unwrap(), renderer.render(&catalog).unwrap());
}

#[test]
fn png_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("reference.png");

	let canvas = GridRenderer::default().render(&reference_catalog()).unwrap();
	canvas.save_png(&path).unwrap();

	let (info, data) = read_png(&path);
	assert_eq!((info.width, info.height), (764, 846));
	assert_eq!(info.color_type, png::ColorType::Rgb);
	assert_eq!(info.bit_depth, png::BitDepth::Eight);
	assert_eq!(data, canvas.pixels());

	// only the image is left behind in the directory
	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn png_into_missing_directory() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("out.png");

	let canvas = GridRenderer::default().render(&reference_catalog()).unwrap();
	let err = canvas.save_png(&path).unwrap_err();
	assert!(matches!(err, RenderError::IoErr(_)));
}
