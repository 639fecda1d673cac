//! Wirebench - decode throughput of Protobuf and Thrift on generated records
//!
//! A dataset holds one randomly generated "all types" record tree rendered
//! through both formats. The `generate` binary writes it, the `wirebench`
//! binary reads it from stdin and runs an empty/full benchmark pair per format.
//!
//! # Example
//! ```
//! use wirebench::{Dataset, GeneratorConfig, WireFormat};
//!
//! let config = GeneratorConfig::new()
//!     .with_string_field_size(5)
//!     .with_repeated_field_size(2)
//!     .with_message_depth(1)
//!     .with_children_size(2);
//! let dataset = Dataset::generate(config, 42).unwrap();
//!
//! let protobuf = WireFormat::Protobuf.decode_record(&dataset.protobuf_data).unwrap();
//! let thrift = WireFormat::Thrift.decode_record(&dataset.thrift_data).unwrap();
//! assert_eq!(protobuf, thrift);
//! assert_eq!(protobuf.node_count(), 3);
//! ```

pub mod bench;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod generator;
pub mod record;
pub mod util;
mod logger;

pub use crate::dataset::Dataset;
pub use crate::error::{BenchError, BenchResult};
pub use crate::format::{Decoded, WireFormat};
pub use crate::generator::{FieldGenerator, GeneratorConfig, RecordBuilder};
pub use crate::record::Record;

use once_cell::sync::Lazy;

static INIT: Lazy<()> = Lazy::new(|| {
    if let Err(e) = logger::init_logger() {
        eprintln!("Logger was not initialized: {}", e);
    }
});

/// Initializes logging once and logs the startup banner for `tool`.
pub fn init(tool: &str) {
    Lazy::force(&INIT);
    util::banner(tool);
}
