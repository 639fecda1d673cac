//! Empty/Full benchmark pairs over the decoders of every wire format.
//!
//! The empty benchmark runs everything the full one does except the decode
//! call. Subtract its time from the full benchmark to get the decode cost.

use crate::dataset::Dataset;
use crate::error::{BenchError, BenchResult};
use crate::format::WireFormat;
use criterion::{Criterion, Throughput};
use log::debug;
use std::hint::black_box;

pub const EMPTY_BENCHMARK_NAME: &str = "parse_all_types_empty";
pub const FULL_BENCHMARK_NAME: &str = "parse_all_types";

/// Iteration bodies for one format over fixed input bytes.
pub struct DecodeBench<'a> {
    format: WireFormat,
    data: &'a [u8],
}

impl<'a> DecodeBench<'a> {
    pub fn new(format: WireFormat, data: &'a [u8]) -> Self {
        Self { format, data }
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// One iteration of the empty benchmark, returning the bytes counted.
    ///
    /// # Errors
    /// Returns `BenchError::DecodeMismatch` if the baseline touched the input
    pub fn empty_iteration(&self) -> BenchResult<u64> {
        let decoded = self.format.baseline(black_box(self.data))?;
        if decoded.consumed != 0 {
            return Err(BenchError::decode_mismatch(format!(
                "{} baseline consumed {} bytes",
                self.format, decoded.consumed
            )));
        }
        Ok(self.data.len() as u64)
    }

    /// One iteration of the full benchmark, returning the bytes decoded.
    ///
    /// # Errors
    /// Returns `BenchError::Decode` if the input does not parse and
    /// `BenchError::DecodeMismatch` if it was not consumed entirely
    pub fn full_iteration(&self) -> BenchResult<u64> {
        let decoded = self.format.decode(black_box(self.data))?;
        if decoded.consumed != self.data.len() {
            return Err(BenchError::decode_mismatch(format!(
                "{} decoded {} bytes of {}",
                self.format,
                decoded.consumed,
                self.data.len()
            )));
        }
        Ok(self.data.len() as u64)
    }
}

/// Registers `<format>/parse_all_types_empty` and `<format>/parse_all_types`
/// for every format in `dataset`.
///
/// Only the full benchmark reports byte throughput. Any iteration error
/// aborts the process.
pub fn bench_parse_all_types(c: &mut Criterion, dataset: &Dataset) {
    for format in WireFormat::ALL {
        let bench = DecodeBench::new(format, dataset.data(format));
        let mut group = c.benchmark_group(format.name());

        group.bench_function(EMPTY_BENCHMARK_NAME, |b| {
            let mut total_bytes = 0u64;
            b.iter(|| total_bytes += checked(&bench, bench.empty_iteration()));
            debug!("{}/{}: counted {} bytes", format, EMPTY_BENCHMARK_NAME, total_bytes);
        });

        group.throughput(Throughput::Bytes(bench.data().len() as u64));
        group.bench_function(FULL_BENCHMARK_NAME, |b| {
            let mut total_bytes = 0u64;
            b.iter(|| total_bytes += checked(&bench, bench.full_iteration()));
            debug!("{}/{}: decoded {} bytes", format, FULL_BENCHMARK_NAME, total_bytes);
        });

        group.finish();
    }
}

fn checked(bench: &DecodeBench<'_>, result: BenchResult<u64>) -> u64 {
    match result {
        Ok(bytes) => bytes,
        Err(e) => abort(bench.format(), &e),
    }
}

fn abort(format: WireFormat, err: &BenchError) -> ! {
    eprintln!("Benchmark for {} aborted: {}", format, err);
    std::process::exit(1)
}
