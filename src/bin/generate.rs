//! Writes a benchmark dataset.
//!
//! ```bash
//! generate config.json dataset.bin
//! generate config.json dataset.bin --seed 7
//! ```
//!
//! The config file is a JSON object with `string_field_size`,
//! `repeated_field_size`, `message_depth` and `children_size`.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use wirebench::config::DEFAULT_SEED;
use wirebench::{BenchResult, Dataset, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "generate", version, about = "Generate a Protobuf/Thrift benchmark dataset")]
struct Args {
    /// JSON generator config
    config_file: PathBuf,

    /// Where to write the dataset
    output_file: PathBuf,

    /// Seed of the random source
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn run(args: &Args) -> BenchResult<()> {
    let config = GeneratorConfig::from_path(&args.config_file)?;
    info!("Loaded {:?} from {:?}", config, args.config_file);

    let dataset = Dataset::generate(config, args.seed)?;
    info!(
        "Protobuf data: {} bytes, Thrift data: {} bytes",
        dataset.protobuf_data.len(),
        dataset.thrift_data.len()
    );
    dataset.write_to_path(&args.output_file)
}

fn main() -> ExitCode {
    let args = Args::parse();
    wirebench::init("generate");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
