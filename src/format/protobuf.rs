use crate::error::{BenchError, BenchResult};
use crate::format::Decoded;
use crate::record::Record;
use prost::Message;
use std::hint::black_box;

/// Protobuf `TestAllTypes` (proto3).
#[derive(Clone, PartialEq, Message)]
pub struct TestAllTypes {
    #[prost(bool, tag = "1")]
    pub bool_value: bool,
    #[prost(int32, tag = "2")]
    pub int32_value: i32,
    #[prost(int64, tag = "3")]
    pub int64_value: i64,
    #[prost(string, tag = "4")]
    pub string_value: String,
    #[prost(bytes = "vec", tag = "5")]
    pub bytes_value: Vec<u8>,
    #[prost(bool, repeated, tag = "6")]
    pub repeated_bool_value: Vec<bool>,
    #[prost(int32, repeated, tag = "7")]
    pub repeated_int32_value: Vec<i32>,
    #[prost(int64, repeated, tag = "8")]
    pub repeated_int64_value: Vec<i64>,
    #[prost(string, repeated, tag = "9")]
    pub repeated_string_value: Vec<String>,
    #[prost(bytes = "vec", repeated, tag = "10")]
    pub repeated_bytes_value: Vec<Vec<u8>>,
    #[prost(message, repeated, tag = "11")]
    pub children: Vec<TestAllTypes>,
}

impl From<&Record> for TestAllTypes {
    fn from(record: &Record) -> Self {
        Self {
            bool_value: record.bool_value,
            int32_value: record.int32_value,
            int64_value: record.int64_value,
            string_value: record.string_value.clone(),
            bytes_value: record.bytes_value.clone(),
            repeated_bool_value: record.repeated_bool_value.clone(),
            repeated_int32_value: record.repeated_int32_value.clone(),
            repeated_int64_value: record.repeated_int64_value.clone(),
            repeated_string_value: record.repeated_string_value.clone(),
            repeated_bytes_value: record.repeated_bytes_value.clone(),
            children: record.children.iter().map(TestAllTypes::from).collect(),
        }
    }
}

impl From<TestAllTypes> for Record {
    fn from(message: TestAllTypes) -> Self {
        Self {
            bool_value: message.bool_value,
            int32_value: message.int32_value,
            int64_value: message.int64_value,
            string_value: message.string_value,
            bytes_value: message.bytes_value,
            repeated_bool_value: message.repeated_bool_value,
            repeated_int32_value: message.repeated_int32_value,
            repeated_int64_value: message.repeated_int64_value,
            repeated_string_value: message.repeated_string_value,
            repeated_bytes_value: message.repeated_bytes_value,
            children: message.children.into_iter().map(Record::from).collect(),
        }
    }
}

pub(crate) fn render(record: &Record) -> BenchResult<Vec<u8>> {
    let message = TestAllTypes::from(record);
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

pub(crate) fn decode_message(data: &[u8]) -> BenchResult<(TestAllTypes, usize)> {
    let mut buf = data;
    let message = TestAllTypes::decode(&mut buf)?;
    Ok((message, data.len() - buf.len()))
}

pub(crate) fn decode(data: &[u8]) -> BenchResult<Decoded> {
    let (message, consumed) = decode_message(data)?;
    black_box(&message);
    Ok(Decoded { consumed })
}

/// Everything [`decode`] does except parsing: a fresh message and one field read.
pub(crate) fn baseline(data: &[u8]) -> BenchResult<Decoded> {
    let message = black_box(TestAllTypes::default());
    black_box(data);
    if message.int32_value != 0 {
        return Err(BenchError::decode_mismatch(
            "fresh protobuf message has a non-zero int32_value",
        ));
    }
    Ok(Decoded { consumed: 0 })
}
