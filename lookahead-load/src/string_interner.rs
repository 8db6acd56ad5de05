//! Utility for string interning.

use elsa::FrozenIndexSet;

/// Collects strings. Indices are handed out in order of first insertion.
pub struct StringInterner {
    set: FrozenIndexSet<String>,
}

impl StringInterner {
    /// Creates a new `StringInterner`.
    pub fn new() -> Self {
        StringInterner {
            set: FrozenIndexSet::new(),
        }
    }

    /// Retrieves an interned value, or inserts a new entry
    /// if it does not exist.
    pub fn get_or_intern<T>(&self, value: T) -> usize
    where
        T: AsRef<str>,
    {
        if let Some(index) = self.get(value.as_ref()) {
            return index;
        }
        self.set.insert_full(value.as_ref().to_string()).0
    }

    /// Retrieves the index of an interned value.
    pub fn get<T>(&self, value: T) -> Option<usize>
    where
        T: AsRef<str>,
    {
        self.set.get_full(value.as_ref()).map(|(i, _r)| i)
    }
}
