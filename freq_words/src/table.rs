use std::borrow::Cow;

use log::debug;

use crate::error::{FreqError, Result};
use crate::rank::SortOrder;

pub const INITIAL_CAPACITY: usize = 256;

/// A distinct word and how often it was seen. `bytes` keeps the casing of
/// the first occurrence and is not necessarily valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub bytes: Vec<u8>,
    pub count: u64,
}

impl WordEntry {
    /// The word for display, with invalid UTF-8 replaced by U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    fn matches(&self, word: &[u8]) -> bool {
        self.bytes.eq_ignore_ascii_case(word)
    }
}

/// Case-insensitive word counts in first-seen order until [`sort`] is called.
///
/// Lookups scan every entry, which is fine for a single text file but
/// quadratic in vocabulary size. Storage doubles when full.
///
/// [`sort`]: FrequencyTable::sort
#[derive(Debug)]
pub struct FrequencyTable {
    entries: Vec<WordEntry>,
    capacity: usize,
}

impl FrequencyTable {
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| FreqError::AllocationExhausted {
                requested: capacity,
            })?;
        Ok(FrequencyTable { entries, capacity })
    }

    /// Counts one occurrence of `word` and returns its new count.
    pub fn insert_or_increment(&mut self, word: impl AsRef<[u8]>) -> Result<u64> {
        let word = word.as_ref();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.matches(word)) {
            entry.count += 1;
            return Ok(entry.count);
        }

        if self.entries.len() == self.capacity {
            self.grow()?;
        }
        self.entries.push(WordEntry {
            bytes: word.to_vec(),
            count: 1,
        });
        Ok(1)
    }

    fn grow(&mut self) -> Result<()> {
        let requested = self
            .capacity
            .checked_mul(2)
            .ok_or(FreqError::AllocationExhausted {
                requested: usize::MAX,
            })?;
        self.entries
            .try_reserve_exact(requested - self.entries.len())
            .map_err(|_| FreqError::AllocationExhausted { requested })?;
        debug!("word table grown from {} to {} entries", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }

    pub fn get(&self, word: impl AsRef<[u8]>) -> Option<&WordEntry> {
        let word = word.as_ref();
        self.entries.iter().find(|entry| entry.matches(word))
    }

    pub fn sort(&mut self, order: SortOrder) {
        self.entries.sort_by(|a, b| order.compare(a, b));
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sum of all counts, i.e. the number of words inserted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
