//! Cursor over the source text and the backtracking primitives the grammar
//! is written in.
//!
//! Every primitive returns `true` on success. A failed primitive leaves the
//! cursor where it was; composite steps wrapped in [`Matcher::attempt`] or
//! [`Matcher::rule`] restore the full checkpoint (cursor, committed records,
//! depth) on failure. Failure is a return value, never an error.

use super::checkpoint::{Checkpoint, CheckpointStack};
use super::store::{MatchRecord, MatchStore};
use super::trace::Tracer;
use super::Rule;

/// Matching state for one parse.
///
/// Offsets are stored as `u32` in match records; callers must reject sources
/// longer than `u32::MAX` bytes before matching.
pub struct Matcher<'s, 't, T: Tracer> {
    source: &'s str,
    pos: usize,
    depth: u32,
    store: MatchStore,
    checkpoints: CheckpointStack,
    /// Rightmost offset where a primitive failed outside negative lookahead.
    furthest: usize,
    lookahead: u32,
    tracer: &'t mut T,
}

impl<'s, 't, T: Tracer> Matcher<'s, 't, T> {
    pub fn new(source: &'s str, tracer: &'t mut T) -> Self {
        Self {
            source,
            pos: 0,
            depth: 0,
            store: MatchStore::new(),
            checkpoints: CheckpointStack::new(),
            furthest: 0,
            lookahead: 0,
            tracer,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn furthest_failure(&self) -> usize {
        self.furthest
    }

    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    pub fn into_store(self) -> MatchStore {
        self.store
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Clear position, records and depth for another run over the same source.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.depth = 0;
        self.store.clear();
        self.checkpoints.clear();
        self.furthest = 0;
        self.lookahead = 0;
    }

    /// Next character, or `None` at the end-of-input sentinel.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn miss(&mut self) -> bool {
        if self.lookahead == 0 {
            self.furthest = self.furthest.max(self.pos);
        }
        false
    }

    pub fn char(&mut self, expected: char) -> bool {
        self.class(|c| c == expected)
    }

    pub fn class(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => self.miss(),
        }
    }

    /// Any character; fails only at end of input.
    pub fn any(&mut self) -> bool {
        self.class(|_| true)
    }

    pub fn literal(&mut self, lit: &str) -> bool {
        if self.source[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            self.miss()
        }
    }

    /// ASCII case-insensitive literal.
    pub fn literal_ci(&mut self, lit: &str) -> bool {
        let rest = &self.source[self.pos..];
        match rest.get(..lit.len()) {
            Some(head) if head.eq_ignore_ascii_case(lit) => {
                self.pos += lit.len();
                true
            }
            _ => self.miss(),
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.pos,
            record_count: self.store.len(),
            depth: self.depth,
        }
    }

    fn open(&mut self) {
        let checkpoint = self.checkpoint();
        self.checkpoints.push(checkpoint);
    }

    fn commit(&mut self) {
        self.checkpoints.pop();
    }

    fn rollback(&mut self) {
        let Some(checkpoint) = self.checkpoints.pop() else {
            return;
        };
        if self.pos != checkpoint.position {
            self.tracer.trace_backtrack(self.pos, checkpoint.position);
        }
        self.pos = checkpoint.position;
        self.store.rewind(checkpoint.record_count);
        self.depth = checkpoint.depth;
    }

    /// Run `body` as one unit: on failure every effect it had is undone.
    pub fn attempt(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.open();
        if body(self) {
            self.commit();
            true
        } else {
            self.rollback();
            false
        }
    }

    /// Zero or more repetitions. Stops on the first failure or on an
    /// iteration that consumed nothing.
    pub fn star(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        loop {
            let before = self.pos;
            if !self.attempt(&mut body) || self.pos == before {
                return true;
            }
        }
    }

    pub fn plus(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        self.attempt(&mut body) && self.star(body)
    }

    pub fn opt(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.attempt(body);
        true
    }

    /// Negative lookahead: succeeds iff `body` fails. Never consumes input.
    pub fn not(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        !self.peek_match(body)
    }

    /// Positive lookahead: succeeds iff `body` matches here. Never consumes input.
    pub fn followed_by(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.peek_match(body)
    }

    fn peek_match(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.open();
        self.lookahead += 1;
        let matched = body(self);
        self.lookahead -= 1;
        self.rollback();
        matched
    }

    /// Apply a grammar rule. On success the rule's record is committed after
    /// every record its body produced, at the depth the rule was entered at.
    pub fn rule(&mut self, rule: Rule, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let begin = self.pos;
        self.tracer.trace_enter(rule, begin);
        self.open();
        self.depth += 1;

        if body(self) {
            self.commit();
            self.depth -= 1;
            self.record(rule, begin, self.pos);
            self.tracer.trace_match(rule, begin, self.pos);
            true
        } else {
            self.rollback();
            self.tracer.trace_fail(rule, begin);
            false
        }
    }

    /// `<...>` capture.
    pub fn text(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.rule(Rule::Text, body)
    }

    /// Commit a zero-width action marker at the cursor.
    pub fn action(&mut self, rule: Rule) -> bool {
        debug_assert!(rule.is_action(), "{rule} is not an action");
        self.record(rule, self.pos, self.pos);
        self.tracer.trace_action(rule, self.pos);
        true
    }

    fn record(&mut self, rule: Rule, begin: usize, end: usize) {
        self.store
            .append(MatchRecord::new(rule, begin as u32, end as u32, self.depth));
    }
}
