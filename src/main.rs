use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use coco2formation::{convert, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let input = PathBuf::from(&args.input);
    if !input.exists() {
        error!("The specified input file does not exist: {}", args.input);
        return ExitCode::FAILURE;
    }

    info!("Starting the conversion process...");

    match convert(&input, &PathBuf::from(&args.output_dir), &args.to_convert_options()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
