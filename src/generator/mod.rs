mod builder;
mod field;
pub mod settings;
mod test;

pub use builder::*;
pub use field::*;
pub use settings::*;

use crate::record::Record;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the record tree described by `config` from a `StdRng` seeded with `seed`.
///
/// The same `(config, seed)` pair always yields the same tree.
pub fn generate_record(config: &GeneratorConfig, seed: u64) -> Record {
    let fields = FieldGenerator::new(StdRng::seed_from_u64(seed));
    RecordBuilder::new(config, fields).build_root()
}
