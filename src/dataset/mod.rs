use crate::config::{
    BINCODE_CONFIG, CURRENT_DATASET_VERSION, DATASET_HEADER_SIZE, DATASET_MAGIC_NUMBER,
};
use crate::error::{BenchError, BenchResult};
use crate::format::WireFormat;
use crate::generator::{generate_record, GeneratorConfig};
use bincode::{Decode, Encode};
use crc32fast::Hasher;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// The generator config plus one encoding of the same record tree per format.
///
/// On disk a dataset is a 16-byte header (magic, version, payload length,
/// payload CRC32; integers little endian) followed by the bincode payload.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Dataset {
    pub config: GeneratorConfig,
    pub protobuf_data: Vec<u8>,
    pub thrift_data: Vec<u8>,
}

impl Dataset {
    pub fn bundle(config: GeneratorConfig, protobuf_data: Vec<u8>, thrift_data: Vec<u8>) -> Self {
        Self {
            config,
            protobuf_data,
            thrift_data,
        }
    }

    /// Builds one record tree and renders it through every format.
    ///
    /// # Arguments
    /// * `config` - Shape of the record tree
    /// * `seed` - Seed of the random source used for every field value
    ///
    /// # Errors
    /// Returns `BenchError::Encode` if a renderer fails
    pub fn generate(config: GeneratorConfig, seed: u64) -> BenchResult<Self> {
        let record = generate_record(&config, seed);
        info!(
            "Generated {} records ({} levels) with seed {}",
            record.node_count(),
            record.depth() + 1,
            seed
        );

        let protobuf_data = WireFormat::Protobuf.render(&record)?;
        let thrift_data = WireFormat::Thrift.render(&record)?;
        debug!(
            "Rendered protobuf: {} bytes, thrift: {} bytes",
            protobuf_data.len(),
            thrift_data.len()
        );

        Ok(Self::bundle(config, protobuf_data, thrift_data))
    }

    pub fn data(&self, format: WireFormat) -> &[u8] {
        match format {
            WireFormat::Protobuf => &self.protobuf_data,
            WireFormat::Thrift => &self.thrift_data,
        }
    }

    /// Rejects datasets that carry an empty encoding.
    ///
    /// # Errors
    /// Returns `BenchError::InvalidDataset` naming the first empty format
    pub fn validate(&self) -> BenchResult<()> {
        for format in WireFormat::ALL {
            if self.data(format).is_empty() {
                return Err(BenchError::invalid_dataset(format!(
                    "{} data is empty",
                    format
                )));
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> BenchResult<Vec<u8>> {
        let payload = bincode::encode_to_vec(self, BINCODE_CONFIG)?;

        let mut hasher = Hasher::new();
        hasher.update(&payload);
        let crc = hasher.finalize();

        let mut bytes = Vec::with_capacity(DATASET_HEADER_SIZE + payload.len());
        bytes.extend_from_slice(DATASET_MAGIC_NUMBER);
        bytes.extend_from_slice(&CURRENT_DATASET_VERSION.to_le_bytes());
        bytes.extend_from_slice(&payload_len_field(payload.len())?.to_le_bytes());
        bytes.extend_from_slice(&crc.to_le_bytes());
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Parses a persisted dataset without validating its contents.
    ///
    /// # Errors
    /// Returns `BenchError::DatasetParse` on a bad header, a checksum mismatch,
    /// a malformed payload or trailing bytes
    pub fn from_bytes(bytes: &[u8]) -> BenchResult<Self> {
        if bytes.len() < DATASET_HEADER_SIZE {
            return Err(BenchError::dataset_parse(format!(
                "Input too short for a dataset header: {} bytes",
                bytes.len()
            )));
        }

        let (header, payload) = bytes.split_at(DATASET_HEADER_SIZE);
        if &header[0..4] != DATASET_MAGIC_NUMBER {
            return Err(BenchError::dataset_parse("Incorrect dataset magic number"));
        }

        let version = read_u32(&header[4..8]);
        if version != CURRENT_DATASET_VERSION {
            return Err(BenchError::dataset_parse(format!(
                "Unsupported dataset version: {}",
                version
            )));
        }

        let payload_len = read_u32(&header[8..12]) as usize;
        if payload_len != payload.len() {
            return Err(BenchError::dataset_parse(format!(
                "Payload length mismatch: header says {}, found {}",
                payload_len,
                payload.len()
            )));
        }

        let mut hasher = Hasher::new();
        hasher.update(payload);
        if hasher.finalize() != read_u32(&header[12..16]) {
            return Err(BenchError::dataset_parse("Dataset CRC mismatch"));
        }

        let (dataset, read): (Dataset, usize) =
            bincode::decode_from_slice(payload, BINCODE_CONFIG)?;
        if read != payload.len() {
            return Err(BenchError::dataset_parse(format!(
                "{} trailing bytes after dataset",
                payload.len() - read
            )));
        }

        Ok(dataset)
    }

    /// Reads, parses and validates a dataset, e.g. from standard input.
    ///
    /// # Errors
    /// Returns `BenchError::Io`, `BenchError::DatasetParse` or
    /// `BenchError::InvalidDataset`
    pub fn load<R: Read>(mut reader: R) -> BenchResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let dataset = Self::from_bytes(&bytes)?;
        dataset.validate()?;
        debug!("Loaded dataset of {} bytes: {:?}", bytes.len(), dataset.config);
        Ok(dataset)
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> BenchResult<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let file = File::create(path).map_err(|e| {
            std::io::Error::new(e.kind(), format!("Cannot write output file {:?}: {}", path, e))
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes)?;
        writer.flush()?;
        info!("Wrote dataset of {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}

/// The header stores the payload length as a `u32`.
fn payload_len_field(len: usize) -> BenchResult<u32> {
    u32::try_from(len).map_err(|_| {
        BenchError::encode(format!(
            "Dataset payload of {} bytes exceeds the {} byte limit",
            len,
            u32::MAX
        ))
    })
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}
