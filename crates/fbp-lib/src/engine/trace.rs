//! Tracing infrastructure for debugging grammar matching.
//!
//! The matcher is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function, so tracing calls and their arguments
//! compile away. [`PrintTracer`] keeps its own indentation state and collects
//! one line per event.

use fbp_core::{Colors, LineIndex};

use super::Rule;

/// Which events [`PrintTracer`] records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rule matches and failures.
    #[default]
    Default,
    /// Also rule entry, actions and backtracking.
    Verbose,
}

/// Hooks called by the matcher.
///
/// - `trace_enter` - a rule body is about to run
/// - `trace_match` - a rule committed a record
/// - `trace_fail` - a rule body failed and was rewound
/// - `trace_action` - an action marker was committed
/// - `trace_backtrack` - an attempt failed after moving the cursor
pub trait Tracer {
    fn trace_enter(&mut self, rule: Rule, pos: usize);

    fn trace_match(&mut self, rule: Rule, begin: usize, end: usize);

    fn trace_fail(&mut self, rule: Rule, pos: usize);

    fn trace_action(&mut self, rule: Rule, pos: usize);

    fn trace_backtrack(&mut self, from: usize, to: usize);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule: Rule, _pos: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _rule: Rule, _begin: usize, _end: usize) {}

    #[inline(always)]
    fn trace_fail(&mut self, _rule: Rule, _pos: usize) {}

    #[inline(always)]
    fn trace_action(&mut self, _rule: Rule, _pos: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _from: usize, _to: usize) {}
}

const TEXT_WIDTH: usize = 32;

/// Tracer that collects a readable matching log.
pub struct PrintTracer<'s> {
    source: &'s str,
    lines_index: LineIndex<'s>,
    verbosity: Verbosity,
    colors: Colors,
    /// Open rules, used for indentation.
    depth: usize,
    lines: Vec<String>,
}

impl<'s> PrintTracer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            lines_index: LineIndex::new(source),
            verbosity: Verbosity::Default,
            colors: Colors::OFF,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn push(&mut self, symbol: &str, content: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{symbol} {content}"));
    }

    fn location(&self, pos: usize) -> String {
        let p = self.lines_index.position(pos);
        let c = &self.colors;
        format!("{}{}:{}{}", c.dim, p.line, p.column, c.reset)
    }

    fn excerpt(&self, begin: usize, end: usize) -> String {
        let text = self.source.get(begin..end).unwrap_or("");
        let mut shown: String = text.chars().take(TEXT_WIDTH).collect();
        if text.chars().count() > TEXT_WIDTH {
            shown.push('…');
        }
        let c = &self.colors;
        format!("{}{:?}{}", c.green, shown, c.reset)
    }

    fn rule_name(&self, rule: Rule) -> String {
        self.colors.paint(self.colors.blue, rule.name())
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_enter(&mut self, rule: Rule, pos: usize) {
        if self.verbose() {
            let content = format!("{} {}", self.rule_name(rule), self.location(pos));
            self.push(">", content);
        }
        self.depth += 1;
    }

    fn trace_match(&mut self, rule: Rule, begin: usize, end: usize) {
        self.depth = self.depth.saturating_sub(1);
        let content = format!(
            "{} {} {}",
            self.rule_name(rule),
            self.location(begin),
            self.excerpt(begin, end)
        );
        self.push("+", content);
    }

    fn trace_fail(&mut self, rule: Rule, pos: usize) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let content = format!(
            "{}{}{} {}",
            c.red,
            rule.name(),
            c.reset,
            self.location(pos)
        );
        self.push("-", content);
    }

    fn trace_action(&mut self, rule: Rule, pos: usize) {
        if self.verbose() {
            let content = format!("{} {}", rule.name(), self.location(pos));
            self.push(".", content);
        }
    }

    fn trace_backtrack(&mut self, from: usize, to: usize) {
        if self.verbose() {
            let content = format!("{} -> {}", self.location(from), self.location(to));
            self.push("<", content);
        }
    }
}
