use std::cmp::Ordering;

use crate::table::WordEntry;

/// How to order a [`FrequencyTable`](crate::table::FrequencyTable).
///
/// Both orders compare the word bytes case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by text.
    Lexical,
    /// Descending by count, ties broken by ascending text.
    #[default]
    Frequency,
}

impl SortOrder {
    pub fn compare(self, a: &WordEntry, b: &WordEntry) -> Ordering {
        match self {
            SortOrder::Lexical => a.bytes.cmp(&b.bytes),
            SortOrder::Frequency => b.count.cmp(&a.count).then_with(|| a.bytes.cmp(&b.bytes)),
        }
    }
}
