pub mod protobuf;
pub mod thrift;

use crate::error::BenchResult;
use crate::record::Record;
use std::fmt;

/// Wire formats compared by the benchmarks.
///
/// Each variant renders a [`Record`] into its own `TestAllTypes` message and
/// decodes it back. The encodings themselves come from `prost` and `thrift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Schema-driven binary encoding (Protocol Buffers).
    Protobuf,
    /// Tagged binary encoding (Thrift binary protocol).
    Thrift,
}

/// Result of one decode: how many input bytes the decoder consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub consumed: usize,
}

impl WireFormat {
    pub const ALL: [WireFormat; 2] = [WireFormat::Protobuf, WireFormat::Thrift];

    pub fn name(&self) -> &'static str {
        match self {
            WireFormat::Protobuf => "protobuf",
            WireFormat::Thrift => "thrift",
        }
    }

    /// Encodes `record` and its whole subtree.
    ///
    /// # Errors
    /// Returns `BenchError::Encode` if the format library fails to write
    pub fn render(&self, record: &Record) -> BenchResult<Vec<u8>> {
        match self {
            WireFormat::Protobuf => protobuf::render(record),
            WireFormat::Thrift => thrift::render(record),
        }
    }

    /// Parses `data` into the format's message and reports the bytes consumed.
    ///
    /// # Errors
    /// Returns `BenchError::Decode` if the format library rejects the input
    pub fn decode(&self, data: &[u8]) -> BenchResult<Decoded> {
        match self {
            WireFormat::Protobuf => protobuf::decode(data),
            WireFormat::Thrift => thrift::decode(data),
        }
    }

    /// Runs the decode setup without parsing anything.
    ///
    /// This is the body of the empty benchmark; it never consumes input.
    ///
    /// # Errors
    /// Returns `BenchError::DecodeMismatch` if a freshly built message or
    /// protocol is not in its initial state
    pub fn baseline(&self, data: &[u8]) -> BenchResult<Decoded> {
        match self {
            WireFormat::Protobuf => protobuf::baseline(data),
            WireFormat::Thrift => thrift::baseline(data),
        }
    }

    /// Parses `data` back into a format-neutral [`Record`].
    pub fn decode_record(&self, data: &[u8]) -> BenchResult<Record> {
        match self {
            WireFormat::Protobuf => protobuf::decode_message(data).map(|(m, _)| Record::from(m)),
            WireFormat::Thrift => thrift::decode_message(data).map(|(m, _)| Record::from(m)),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use crate::generator::{generate_record, GeneratorConfig};

    fn sample_config() -> GeneratorConfig {
        GeneratorConfig::new()
            .with_string_field_size(5)
            .with_repeated_field_size(2)
            .with_message_depth(2)
            .with_children_size(2)
    }

    #[test]
    fn test_round_trip_per_format() {
        let record = generate_record(&sample_config(), 42);
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            assert!(!bytes.is_empty());
            assert_eq!(format.decode_record(&bytes).unwrap(), record, "{}", format);
        }
    }

    #[test]
    fn test_decode_consumes_all_input() {
        let record = generate_record(&sample_config(), 7);
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            let decoded = format.decode(&bytes).unwrap();
            assert_eq!(decoded.consumed, bytes.len(), "{}", format);
        }
    }

    #[test]
    fn test_baseline_consumes_nothing() {
        let record = generate_record(&sample_config(), 7);
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            assert_eq!(format.baseline(&bytes).unwrap().consumed, 0, "{}", format);
        }
    }

    #[test]
    fn test_zero_config_record_decodes_empty() {
        let record = generate_record(&GeneratorConfig::new(), 3);
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            let decoded = format.decode_record(&bytes).unwrap();
            assert!(decoded.string_value.is_empty());
            assert!(decoded.bytes_value.is_empty());
            assert!(decoded.children.is_empty());
            assert_eq!(decoded, record);
        }
    }

    #[test]
    fn test_extreme_integers_round_trip() {
        let record = Record {
            int32_value: i32::MIN,
            int64_value: i64::MAX,
            repeated_int32_value: vec![i32::MAX, -1, 0],
            repeated_int64_value: vec![i64::MIN, 1],
            ..Record::default()
        };
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            assert_eq!(format.decode_record(&bytes).unwrap(), record, "{}", format);
        }
    }

    #[test]
    fn test_truncated_input_is_decode_error() {
        let record = generate_record(&sample_config(), 11);
        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            let truncated = &bytes[..bytes.len() - 1];
            let err = format.decode(truncated).unwrap_err();
            assert!(matches!(err, BenchError::Decode { .. }), "{}: {}", format, err);
        }
    }

    #[test]
    fn test_deeply_nested_record_round_trips() {
        let config = GeneratorConfig::new()
            .with_string_field_size(1)
            .with_message_depth(150)
            .with_children_size(1);
        let record = generate_record(&config, 13);
        assert_eq!(record.depth(), 150);

        for format in WireFormat::ALL {
            let bytes = format.render(&record).unwrap();
            assert_eq!(format.decode(&bytes).unwrap().consumed, bytes.len(), "{}", format);
            assert_eq!(format.decode_record(&bytes).unwrap(), record, "{}", format);
        }
    }

    #[test]
    fn test_formats_produce_different_bytes() {
        let record = generate_record(&sample_config(), 5);
        let protobuf = WireFormat::Protobuf.render(&record).unwrap();
        let thrift = WireFormat::Thrift.render(&record).unwrap();
        assert_ne!(protobuf, thrift);
    }

    #[test]
    fn test_names() {
        assert_eq!(WireFormat::Protobuf.name(), "protobuf");
        assert_eq!(WireFormat::Thrift.to_string(), "thrift");
    }
}
