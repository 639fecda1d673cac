use thiserror::Error;

pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {message}")]
    ConfigParse { message: String },

    #[error("Dataset parse error: {message}")]
    DatasetParse { message: String },

    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    #[error("Decode mismatch: {message}")]
    DecodeMismatch { message: String },

    #[error("Encode error: {message}")]
    Encode { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl BenchError {
    pub fn config_parse<T: std::fmt::Display>(message: T) -> Self {
        Self::ConfigParse {
            message: message.to_string(),
        }
    }

    pub fn dataset_parse<T: std::fmt::Display>(message: T) -> Self {
        Self::DatasetParse {
            message: message.to_string(),
        }
    }

    pub fn invalid_dataset<T: std::fmt::Display>(message: T) -> Self {
        Self::InvalidDataset {
            message: message.to_string(),
        }
    }

    pub fn decode_mismatch<T: std::fmt::Display>(message: T) -> Self {
        Self::DecodeMismatch {
            message: message.to_string(),
        }
    }

    pub fn encode<T: std::fmt::Display>(message: T) -> Self {
        Self::Encode {
            message: message.to_string(),
        }
    }

    pub fn decode<T: std::fmt::Display>(message: T) -> Self {
        Self::Decode {
            message: message.to_string(),
        }
    }
}

impl From<bincode::error::EncodeError> for BenchError {
    fn from(err: bincode::error::EncodeError) -> Self {
        BenchError::encode(format!("Dataset encode error: {}", err))
    }
}

impl From<bincode::error::DecodeError> for BenchError {
    fn from(err: bincode::error::DecodeError) -> Self {
        BenchError::dataset_parse(format!("Dataset decode error: {}", err))
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::config_parse(err)
    }
}

impl From<prost::EncodeError> for BenchError {
    fn from(err: prost::EncodeError) -> Self {
        BenchError::encode(format!("Protobuf: {}", err))
    }
}

impl From<prost::DecodeError> for BenchError {
    fn from(err: prost::DecodeError) -> Self {
        BenchError::decode(format!("Protobuf: {}", err))
    }
}

impl From<thrift::Error> for BenchError {
    fn from(err: thrift::Error) -> Self {
        BenchError::decode(format!("Thrift: {}", err))
    }
}
