use rand::Rng;

/// Produces the scalar values of generated records.
///
/// Owns the single random source of a generation run; every call advances it.
pub struct FieldGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> FieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate_bool(&mut self) -> bool {
        self.rng.random::<bool>()
    }

    /// Uniform over the lowercase ASCII letters.
    pub fn generate_char(&mut self) -> char {
        self.rng.random_range('a'..='z')
    }

    /// Builds a string of `length` independently drawn characters.
    ///
    /// Byte-string fields are generated through this path too.
    pub fn generate_string(&mut self, length: usize) -> String {
        let mut result = String::with_capacity(length);
        for _ in 0..length {
            result.push(self.generate_char());
        }
        result
    }

    pub fn generate_int32(&mut self) -> i32 {
        self.rng.random::<i32>()
    }

    pub fn generate_int64(&mut self) -> i64 {
        self.rng.random::<i64>()
    }
}
