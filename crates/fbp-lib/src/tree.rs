//! Parse tree reconstruction from the flat record log.
//!
//! Records arrive in completion order, so every node's descendants precede it.
//! Replaying them with a stack of open nodes, each record adopts the stack
//! entries it contains (same or wider span, shallower depth) as children.

use std::fmt::Write;

use fbp_core::Colors;

use crate::engine::{MatchRecord, Rule};

/// Record indices grouped by depth, each group in completion order.
pub fn order_by_depth(records: &[MatchRecord]) -> Vec<Vec<usize>> {
    let mut levels: Vec<Vec<usize>> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let depth = record.depth as usize;
        if levels.len() <= depth {
            levels.resize_with(depth + 1, Vec::new);
        }
        levels[depth].push(index);
    }
    levels
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub rule: Rule,
    pub begin: u32,
    pub end: u32,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source
            .get(self.begin as usize..self.end as usize)
            .unwrap_or("")
    }
}

/// Arena-backed parse tree.
#[derive(Clone, Debug, Default)]
pub struct ParseTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl ParseTree {
    /// Zero-width records are skipped except the last one, which is always the root.
    pub fn build(records: &[MatchRecord]) -> Self {
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(records.len());
        let mut open: Vec<(NodeId, MatchRecord)> = Vec::new();
        let last = records.len().saturating_sub(1);

        for (index, record) in records.iter().enumerate() {
            if record.is_empty() && index != last {
                continue;
            }

            let mut children = Vec::new();
            while let Some((id, child)) = open.last() {
                if !record.is_ancestor_of(child) {
                    break;
                }
                children.push(*id);
                open.pop();
            }
            children.reverse();

            let id = NodeId(nodes.len() as u32);
            nodes.push(TreeNode {
                rule: record.rule,
                begin: record.begin,
                end: record.end,
                children,
            });
            open.push((id, *record));
        }

        let root = open.pop().map(|(id, _)| id);
        Self { nodes, root }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn printer<'t, 's>(&'t self, source: &'s str) -> TreePrinter<'t, 's> {
        TreePrinter::new(self, source)
    }
}

/// Builder for indented tree dumps.
///
/// One line per node: rule name, optional byte span, and for leaves the
/// matched text. Blank runs and single-character helper rules are hidden
/// unless `raw` is set.
pub struct TreePrinter<'t, 's> {
    tree: &'t ParseTree,
    source: &'s str,
    spans: bool,
    raw: bool,
    colors: Colors,
}

impl<'t, 's> TreePrinter<'t, 's> {
    pub fn new(tree: &'t ParseTree, source: &'s str) -> Self {
        Self {
            tree,
            source,
            spans: false,
            raw: false,
            colors: Colors::OFF,
        }
    }

    pub fn spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.tree.root() {
            self.format_node(&mut out, root, 0)
                .expect("String write never fails");
        }
        out
    }

    fn format_node(&self, w: &mut String, id: NodeId, indent: usize) -> std::fmt::Result {
        let node = self.tree.node(id);
        let c = &self.colors;

        write!(w, "{}{}{}{}", "  ".repeat(indent), c.blue, node.rule, c.reset)?;
        if self.spans {
            write!(w, " {}[{}..{}]{}", c.dim, node.begin, node.end, c.reset)?;
        }

        let children: Vec<NodeId> = node
            .children
            .iter()
            .copied()
            .filter(|&child| self.raw || !self.tree.node(child).rule.is_trivia())
            .collect();
        if children.is_empty() {
            write!(w, " {}{:?}{}", c.green, node.text(self.source), c.reset)?;
        }
        w.push('\n');

        for child in children {
            self.format_node(w, child, indent + 1)?;
        }
        Ok(())
    }
}
