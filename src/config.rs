use bincode::config;
use bincode::config::Configuration;

pub const BINCODE_CONFIG: Configuration = config::standard();
pub const DATASET_MAGIC_NUMBER: &[u8; 4] = b"WBDS";
pub const CURRENT_DATASET_VERSION: u32 = 1;
pub const DATASET_HEADER_SIZE: usize = 16;
pub const DEFAULT_SEED: u64 = 5489;
pub const LOG_LEVEL_ENV: &str = "WIREBENCH_LOG";
