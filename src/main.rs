use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;
use log::LevelFilter;

use crate::cmd_batch::cram_batch;
use crate::cmd_info::cram_info;
use crate::cmd_render::cram_render;
use crate::commands::{Cli, Commands};

mod cmd_batch;
mod cmd_info;
mod cmd_render;
mod commands;
mod common;

fn init_logging(debug: bool) {
	let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let output: &PathBuf;

	let result = match &cli.command {
		Some(Commands::Render(args)) => {
			output = &args.output;
			cram_render(args)
		}
		Some(Commands::Batch(args)) => {
			return match cram_batch(args) {
				Ok(_) => ExitCode::SUCCESS,
				Err(e) => {
					eprintln!("execution failed: {e:#}");
					ExitCode::FAILURE
				}
			}
		}
		Some(Commands::Info(args)) => {
			return match cram_info(args) {
				Ok(_) => ExitCode::SUCCESS,
				Err(e) => {
					eprintln!("execution failed: {e:#}");
					ExitCode::FAILURE
				}
			}
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			match fs::metadata(output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
