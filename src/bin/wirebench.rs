//! Runs the decode benchmarks on a dataset read from stdin.
//!
//! ```bash
//! wirebench < dataset.bin
//! wirebench --sample-size 50 < dataset.bin
//! ```
//!
//! Arguments are passed through to criterion.

use criterion::Criterion;
use std::io::Write;
use std::process::ExitCode;
use wirebench::bench::bench_parse_all_types;
use wirebench::util::write_size_report;
use wirebench::Dataset;

fn main() -> ExitCode {
    wirebench::init("wirebench");

    let dataset = match Dataset::load(std::io::stdin().lock()) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Cannot read dataset from stdin: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_size_report(&mut stdout, &dataset).and_then(|_| stdout.flush()) {
        eprintln!("Cannot write to stdout: {}", e);
        return ExitCode::FAILURE;
    }
    drop(stdout);

    let mut criterion = Criterion::default().configure_from_args();
    bench_parse_all_types(&mut criterion, &dataset);
    criterion.final_summary();

    ExitCode::SUCCESS
}
