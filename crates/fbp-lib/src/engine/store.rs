//! Flat log of completed rule matches.
//!
//! Records are appended in completion order, which is the post-order of the
//! search. Backtracking only lowers the committed length: slots past it keep
//! the records of abandoned attempts until they are overwritten, so failure
//! diagnostics can still see how far each attempt got.

use std::ops::Range;

use super::Rule;

const INITIAL_CAPACITY: usize = 64;

/// One successful rule application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub rule: Rule,
    pub begin: u32,
    pub end: u32,
    /// Nesting depth at commit; the root rule sits at 0.
    pub depth: u32,
}

impl MatchRecord {
    pub fn new(rule: Rule, begin: u32, end: u32, depth: u32) -> Self {
        Self {
            rule,
            begin,
            end,
            depth,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.begin as usize..self.end as usize
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// `self` spans `other` and was committed at a shallower depth.
    pub fn is_ancestor_of(&self, other: &MatchRecord) -> bool {
        self.begin <= other.begin && self.end >= other.end && self.depth < other.depth
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or("")
    }
}

/// Growable, index-addressed record log with O(1) rewind.
#[derive(Clone, Debug)]
pub struct MatchStore {
    slots: Vec<MatchRecord>,
    len: usize,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.max(1)),
            len: 0,
        }
    }

    /// Number of committed records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Committed plus abandoned records ever written.
    pub fn high_water(&self) -> usize {
        self.slots.len()
    }

    /// Append at the committed end, overwriting any abandoned record in that slot.
    /// Returns the index of the new record.
    pub fn append(&mut self, record: MatchRecord) -> usize {
        let index = self.len;
        if index < self.slots.len() {
            self.slots[index] = record;
        } else {
            if self.slots.len() == self.slots.capacity() {
                self.grow();
            }
            self.slots.push(record);
        }
        self.len += 1;
        index
    }

    /// Double the capacity; existing records keep their indices.
    fn grow(&mut self) {
        let additional = self.slots.capacity().max(1);
        self.slots.reserve_exact(additional);
    }

    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.committed().get(index)
    }

    /// Rewind to `len` committed records. Never grows the log.
    #[inline]
    pub fn rewind(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Drop abandoned records so the log holds exactly the committed ones.
    pub fn trim(&mut self) {
        self.slots.truncate(self.len);
        self.slots.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }

    pub fn committed(&self) -> &[MatchRecord] {
        &self.slots[..self.len]
    }

    /// Everything up to the high-water mark, abandoned attempts included.
    pub fn explored(&self) -> &[MatchRecord] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.committed().iter()
    }

    pub fn into_records(mut self) -> Vec<MatchRecord> {
        self.trim();
        self.slots
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}
