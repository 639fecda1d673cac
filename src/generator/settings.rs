use crate::error::{BenchError, BenchResult};
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shape of the generated record tree.
///
/// Read from a JSON file by the `generate` binary and stored verbatim in the
/// dataset it produces. Fields missing from the file default to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub string_field_size: u32,
    pub repeated_field_size: u32,
    pub message_depth: u32,
    pub children_size: u32,
}

impl GeneratorConfig {
    /// Creates a config with every dimension set to zero.
    ///
    /// # Returns
    /// A config describing a single record with empty strings and no repeated values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of every generated string and byte string.
    ///
    /// # Arguments
    /// * `size` - Number of characters per string field
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_string_field_size(mut self, size: u32) -> Self {
        self.string_field_size = size;
        self
    }

    /// Sets the number of elements in every repeated field.
    ///
    /// # Arguments
    /// * `size` - Number of elements per repeated field
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_repeated_field_size(mut self, size: u32) -> Self {
        self.repeated_field_size = size;
        self
    }

    /// Sets how many levels of children are generated below the root.
    ///
    /// # Arguments
    /// * `depth` - Recursion depth, `0` produces a root without children
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_message_depth(mut self, depth: u32) -> Self {
        self.message_depth = depth;
        self
    }

    /// Sets the fan-out of every non-leaf record.
    ///
    /// # Arguments
    /// * `size` - Number of children per non-leaf record
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_children_size(mut self, size: u32) -> Self {
        self.children_size = size;
        self
    }

    /// Parses a config from its JSON text form.
    ///
    /// # Errors
    /// Returns `BenchError::ConfigParse` on malformed JSON, wrongly typed
    /// values or unknown fields
    pub fn from_json_str(text: &str) -> BenchResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    /// Returns `BenchError::ConfigParse` if the file cannot be read or parsed
    pub fn from_path<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BenchError::config_parse(format!("Failed to open config file {:?}: {}", path, e))
        })?;
        Self::from_json_str(&text).map_err(|e| {
            BenchError::config_parse(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Number of records the config produces: `1 + c + c^2 + ... + c^d`.
    pub fn expected_node_count(&self) -> u64 {
        if self.children_size == 0 {
            return 1;
        }
        let mut level = 1u64;
        let mut total = 1u64;
        for _ in 0..self.message_depth {
            level = level.saturating_mul(self.children_size as u64);
            total = total.saturating_add(level);
        }
        total
    }
}
