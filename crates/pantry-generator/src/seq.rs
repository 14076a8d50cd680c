use crate::Generator;
use pantry_core::Identifier;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic identifier generator using a sequential counter.
///
/// This generator produces sequential identifiers like "seq000000", "seq000001", etc.
/// It never repeats a value within a single instance, which makes it handy for
/// reproducible runs and for exercising collision handling in tests.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    ///
    /// Useful for resuming after a known set of identifiers.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = Identifier;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        // the zero-padded counter keeps the value non-empty even with an empty prefix
        Identifier::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
