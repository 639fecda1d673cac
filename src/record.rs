/// Format-neutral "all types" record.
///
/// Both wire formats declare a `TestAllTypes` message with exactly these
/// fields; a `Record` is converted into either one right before encoding and
/// back after decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
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
    pub children: Vec<Record>,
}

impl Record {
    /// Returns the number of records in this subtree, including `self`.
    pub fn node_count(&self) -> u64 {
        1 + self.children.iter().map(Record::node_count).sum::<u64>()
    }

    /// Returns the number of child levels below this record.
    ///
    /// A record without children has depth 0.
    pub fn depth(&self) -> u32 {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visits this record and every descendant in pre-order.
    pub fn visit<F: FnMut(&Record)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}
