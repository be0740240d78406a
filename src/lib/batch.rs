use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::cram::dump::PaletteCatalog;
use crate::grid::renderer::GridRenderer;

const DUMP_EXTENSION: &str = "bin";
const IMAGE_EXTENSION: &str = "png";

/// Outcome of a directory run. A failing dump never stops the others.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub rendered: Vec<PathBuf>,
	pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
	pub fn is_success(&self) -> bool {
		self.failed.is_empty()
	}
}

fn is_dump_file(path: &Path) -> bool {
	path.is_file() && path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|e| e.eq_ignore_ascii_case(DUMP_EXTENSION))
}

/// Returns every `.bin` file directly inside `dir`, sorted by path.
pub fn find_dumps<P: AsRef<Path>>(dir: P) -> std::io::Result<Vec<PathBuf>> {
	let mut dumps = fs::read_dir(dir)?
		.map(|entry| entry.map(|e| e.path()))
		.collect::<std::io::Result<Vec<PathBuf>>>()?;

	dumps.retain(|p| is_dump_file(p));
	dumps.sort();
	Ok(dumps)
}

/// Renders every CRAM dump in `dir` to a PNG with the same stem.
pub fn render_directory<P: AsRef<Path>>(dir: P, renderer: &GridRenderer) -> std::io::Result<BatchReport> {
	let mut report = BatchReport::default();
	let colors_per_dump = renderer.config().colors_per_dump;

	for dump_path in find_dumps(&dir)? {
		let image_path = dump_path.with_extension(IMAGE_EXTENSION);

		let result = PaletteCatalog::from_cram_file(&dump_path, colors_per_dump)
			.map_err(|e| e.to_string())
			.and_then(|catalog| renderer.render(&catalog).map_err(|e| e.to_string()))
			.and_then(|canvas| canvas.save_png(&image_path).map_err(|e| e.to_string()));

		match result {
			Ok(()) => {
				info!("{} -> {}", dump_path.display(), image_path.display());
				report.rendered.push(image_path);
			}
			Err(e) => {
				error!("{}: {e}", dump_path.display());
				report.failed.push((dump_path, e));
			}
		}
	}

	Ok(report)
}
