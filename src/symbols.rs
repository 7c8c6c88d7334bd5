use std::collections::HashMap;
use std::fmt;

/// Deduplicated table of identifier-like tokens.
///
/// Indices are dense, 0-based, and assigned in first-seen order; an index
/// is never reassigned within a run. The table is owned by a single
/// classification run and rebuilt per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<String>,
    by_text: HashMap<String, usize>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `text`, inserting it at the next index if absent.
    /// Returns the stable index either way.
    pub fn add(&mut self, text: &str) -> usize {
        if let Some(&index) = self.by_text.get(text) {
            return index;
        }
        let index = self.entries.len();
        self.entries.push(text.to_string());
        self.by_text.insert(text.to_string(), index);
        index
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.by_text.get(text).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in index order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, text)| (i, text.as_str()))
    }
}

/// Report form used after classification, e.g. `{0: x, 1: y}`.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, text) in self.entries() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}: {text}")?;
        }
        write!(f, "}}")
    }
}
