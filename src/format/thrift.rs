use crate::error::{BenchError, BenchResult};
use crate::format::Decoded;
use crate::record::Record;
use std::hint::black_box;
use thrift::protocol::{
    TBinaryInputProtocol, TBinaryOutputProtocol, TFieldIdentifier, TInputProtocol,
    TListIdentifier, TOutputProtocol, TStructIdentifier, TType,
};

/// Thrift `TestAllTypes`, written with the strict binary protocol.
///
/// ```thrift
/// struct TestAllTypes {
///   1: bool bool_value,
///   2: i32 int32_value,
///   3: i64 int64_value,
///   4: string string_value,
///   5: binary bytes_value,
///   6: list<bool> repeated_bool_value,
///   7: list<i32> repeated_int32_value,
///   8: list<i64> repeated_int64_value,
///   9: list<string> repeated_string_value,
///   10: list<binary> repeated_bytes_value,
///   11: list<TestAllTypes> children,
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestAllTypes {
    pub bool_value: bool,
    pub int32_value: i32,
    pub int64_value: i64,
    pub string_value: String,
    pub bytes_value: Vec<u8>,
    pub repeated_bool_value: Vec<bool>,
    pub repeated_int32_value: Vec<i32>,
    pub repeated_int64_value: Vec<i64>,
    pub repeated_string_value: Vec<String>,
    pub repeated_bytes_value: Vec<Vec<u8>>,
    pub children: Vec<TestAllTypes>,
}

impl TestAllTypes {
    pub fn read(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut message = TestAllTypes::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match (field_ident.id, field_ident.field_type) {
                (Some(1), TType::Bool) => message.bool_value = i_prot.read_bool()?,
                (Some(2), TType::I32) => message.int32_value = i_prot.read_i32()?,
                (Some(3), TType::I64) => message.int64_value = i_prot.read_i64()?,
                (Some(4), TType::String) => message.string_value = i_prot.read_string()?,
                (Some(5), TType::String) => message.bytes_value = i_prot.read_bytes()?,
                (Some(6), TType::List) => {
                    message.repeated_bool_value = read_list(i_prot, |p| p.read_bool())?
                }
                (Some(7), TType::List) => {
                    message.repeated_int32_value = read_list(i_prot, |p| p.read_i32())?
                }
                (Some(8), TType::List) => {
                    message.repeated_int64_value = read_list(i_prot, |p| p.read_i64())?
                }
                (Some(9), TType::List) => {
                    message.repeated_string_value = read_list(i_prot, |p| p.read_string())?
                }
                (Some(10), TType::List) => {
                    message.repeated_bytes_value = read_list(i_prot, |p| p.read_bytes())?
                }
                (Some(11), TType::List) => {
                    message.children = read_list(i_prot, TestAllTypes::read)?
                }
                (_, field_type) => i_prot.skip(field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(message)
    }

    pub fn write(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TestAllTypes"))?;

        o_prot.write_field_begin(&TFieldIdentifier::new("bool_value", TType::Bool, 1))?;
        o_prot.write_bool(self.bool_value)?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("int32_value", TType::I32, 2))?;
        o_prot.write_i32(self.int32_value)?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("int64_value", TType::I64, 3))?;
        o_prot.write_i64(self.int64_value)?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("string_value", TType::String, 4))?;
        o_prot.write_string(&self.string_value)?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("bytes_value", TType::String, 5))?;
        o_prot.write_bytes(&self.bytes_value)?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("repeated_bool_value", TType::List, 6))?;
        write_list(o_prot, TType::Bool, &self.repeated_bool_value, |p, v| p.write_bool(*v))?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("repeated_int32_value", TType::List, 7))?;
        write_list(o_prot, TType::I32, &self.repeated_int32_value, |p, v| p.write_i32(*v))?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("repeated_int64_value", TType::List, 8))?;
        write_list(o_prot, TType::I64, &self.repeated_int64_value, |p, v| p.write_i64(*v))?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("repeated_string_value", TType::List, 9))?;
        write_list(o_prot, TType::String, &self.repeated_string_value, |p, v| p.write_string(v))?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("repeated_bytes_value", TType::List, 10))?;
        write_list(o_prot, TType::String, &self.repeated_bytes_value, |p, v| p.write_bytes(v))?;
        o_prot.write_field_end()?;

        o_prot.write_field_begin(&TFieldIdentifier::new("children", TType::List, 11))?;
        write_list(o_prot, TType::Struct, &self.children, |p, v| v.write(p))?;
        o_prot.write_field_end()?;

        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

fn read_list<T, F>(i_prot: &mut dyn TInputProtocol, mut read_element: F) -> thrift::Result<Vec<T>>
where
    F: FnMut(&mut dyn TInputProtocol) -> thrift::Result<T>,
{
    let list_ident = i_prot.read_list_begin()?;
    let mut values = Vec::with_capacity(list_ident.size.max(0) as usize);
    for _ in 0..list_ident.size {
        values.push(read_element(&mut *i_prot)?);
    }
    i_prot.read_list_end()?;
    Ok(values)
}

fn write_list<T, F>(
    o_prot: &mut dyn TOutputProtocol,
    element_type: TType,
    values: &[T],
    mut write_element: F,
) -> thrift::Result<()>
where
    F: FnMut(&mut dyn TOutputProtocol, &T) -> thrift::Result<()>,
{
    o_prot.write_list_begin(&TListIdentifier::new(element_type, values.len() as i32))?;
    for value in values {
        write_element(&mut *o_prot, value)?;
    }
    o_prot.write_list_end()
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
    let mut buf = Vec::new();
    {
        let mut o_prot = TBinaryOutputProtocol::new(&mut buf, true);
        message
            .write(&mut o_prot)
            .and_then(|_| o_prot.flush())
            .map_err(|e| BenchError::encode(format!("Thrift: {}", e)))?;
    }
    Ok(buf)
}

pub(crate) fn decode_message(data: &[u8]) -> BenchResult<(TestAllTypes, usize)> {
    let mut remaining = data;
    let message = {
        let mut i_prot = TBinaryInputProtocol::new(&mut remaining, true);
        TestAllTypes::read(&mut i_prot)?
    };
    Ok((message, data.len() - remaining.len()))
}

pub(crate) fn decode(data: &[u8]) -> BenchResult<Decoded> {
    let (message, consumed) = decode_message(data)?;
    black_box(&message);
    Ok(Decoded { consumed })
}

/// Everything [`decode`] does except parsing: a fresh message and a protocol
/// opened over the input, of which nothing may have been consumed.
pub(crate) fn baseline(data: &[u8]) -> BenchResult<Decoded> {
    let mut remaining = data;
    {
        let message = black_box(TestAllTypes::default());
        let i_prot = TBinaryInputProtocol::new(&mut remaining, true);
        black_box(&i_prot);
        black_box(&message);
    }
    let consumed = data.len() - remaining.len();
    if consumed != 0 {
        return Err(BenchError::decode_mismatch(format!(
            "thrift baseline consumed {} bytes without parsing",
            consumed
        )));
    }
    Ok(Decoded { consumed })
}
