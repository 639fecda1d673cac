use crate::generator::{FieldGenerator, GeneratorConfig};
use crate::record::Record;
use rand::Rng;

/// Builds record trees shaped by a [`GeneratorConfig`].
///
/// The builder is format-neutral: a tree is built once and can then be
/// rendered through every wire format, so all encodings of a dataset carry
/// the same values.
pub struct RecordBuilder<'a, R: Rng> {
    config: &'a GeneratorConfig,
    fields: FieldGenerator<R>,
}

impl<'a, R: Rng> RecordBuilder<'a, R> {
    pub fn new(config: &'a GeneratorConfig, fields: FieldGenerator<R>) -> Self {
        Self { config, fields }
    }

    /// Builds the full tree, `config.message_depth` levels below the root.
    pub fn build_root(&mut self) -> Record {
        self.build(self.config.message_depth)
    }

    /// Builds one record and its subtree.
    ///
    /// Fields are always populated. Children are only added while `depth > 0`,
    /// `children_size` of them per level, each built with `depth - 1`.
    pub fn build(&mut self, depth: u32) -> Record {
        let mut record = Record::default();
        self.fill_fields(&mut record);
        if depth == 0 {
            return record;
        }

        let children_size = self.config.children_size as usize;
        record.children.reserve(children_size);
        for _ in 0..children_size {
            let child = self.build(depth - 1);
            record.children.push(child);
        }
        record
    }

    fn fill_fields(&mut self, record: &mut Record) {
        let repeated = self.config.repeated_field_size as usize;
        let string_size = self.config.string_field_size as usize;
        let fields = &mut self.fields;

        record.bool_value = fields.generate_bool();
        record.repeated_bool_value = (0..repeated).map(|_| fields.generate_bool()).collect();

        record.int32_value = fields.generate_int32();
        record.repeated_int32_value = (0..repeated).map(|_| fields.generate_int32()).collect();

        record.int64_value = fields.generate_int64();
        record.repeated_int64_value = (0..repeated).map(|_| fields.generate_int64()).collect();

        record.string_value = fields.generate_string(string_size);
        record.repeated_string_value = (0..repeated)
            .map(|_| fields.generate_string(string_size))
            .collect();

        record.bytes_value = fields.generate_string(string_size).into_bytes();
        record.repeated_bytes_value = (0..repeated)
            .map(|_| fields.generate_string(string_size).into_bytes())
            .collect();
    }
}
