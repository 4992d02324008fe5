//! Collapsible tree projection of a parsed JSON value
//!
//! The tree is a flat row list rebuilt on every explicit tree build; rows are
//! never persisted. Structural recursion over `serde_json::Value` produces one
//! row per opening bracket, member, and closing bracket, with depth for
//! indentation and a span for collapse bookkeeping. Collapsing an opening row
//! hides its children block; the closing bracket stays visible.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Bool,
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Opening `{` or `[` row; carries the expand/collapse toggle
    Open,
    /// Closing `}` or `]` row
    Close,
    /// Scalar leaf rendered as its JSON literal
    Leaf(ScalarKind),
}

#[derive(Debug, Clone)]
pub struct TreeRow {
    /// Object member key, when this row is an object member. Array elements
    /// and bracket-closing rows have none.
    pub key: Option<String>,
    /// Bracket character for Open/Close rows, JSON literal for leaves
    pub text: String,
    pub kind: RowKind,
    pub depth: usize,
    /// Rows after this one that belong to its subtree, closing row included.
    /// Zero for leaves and closing rows.
    pub span: usize,
    pub expanded: bool,
    pub visible: bool,
}

impl TreeRow {
    pub fn is_toggle(&self) -> bool {
        self.kind == RowKind::Open
    }
}

fn scalar_kind(v: &Value) -> ScalarKind {
    match v {
        Value::String(_) => ScalarKind::String,
        Value::Number(_) => ScalarKind::Number,
        Value::Bool(_) => ScalarKind::Bool,
        _ => ScalarKind::Null,
    }
}

/// Flatten a parsed value into rows, members in insertion order.
pub fn build_rows(root: &Value) -> Vec<TreeRow> {
    let mut rows = Vec::with_capacity(64);
    walk(&mut rows, None, root, 0);
    rows
}

fn walk(rows: &mut Vec<TreeRow>, key: Option<String>, v: &Value, depth: usize) {
    match v {
        Value::Object(map) => {
            let open = rows.len();
            push(rows, key, "{", RowKind::Open, depth);
            for (k, child) in map {
                walk(rows, Some(k.clone()), child, depth + 1);
            }
            push(rows, None, "}", RowKind::Close, depth);
            rows[open].span = rows.len() - open - 1;
        }
        Value::Array(arr) => {
            let open = rows.len();
            push(rows, key, "[", RowKind::Open, depth);
            for child in arr {
                walk(rows, None, child, depth + 1);
            }
            push(rows, None, "]", RowKind::Close, depth);
            rows[open].span = rows.len() - open - 1;
        }
        _ => {
            let literal = serde_json::to_string(v).unwrap_or_default();
            push(rows, key, &literal, RowKind::Leaf(scalar_kind(v)), depth);
        }
    }
}

fn push(rows: &mut Vec<TreeRow>, key: Option<String>, text: &str, kind: RowKind, depth: usize) {
    rows.push(TreeRow {
        key,
        text: text.to_string(),
        kind,
        depth,
        span: 0,
        expanded: true,
        visible: true,
    });
}

/// Recompute row visibility from the expansion flags.
///
/// A collapsed Open row hides everything between itself and its closing
/// bracket; the bracket itself stays visible, so a collapsed object reads as
/// `{ ... }` on two rows.
pub fn recompute_visibility(rows: &mut [TreeRow]) {
    for row in rows.iter_mut() {
        row.visible = true;
    }
    let mut i = 0;
    while i < rows.len() {
        if rows[i].kind == RowKind::Open && !rows[i].expanded && rows[i].span > 0 {
            let close = i + rows[i].span;
            for row in rows.iter_mut().take(close).skip(i + 1) {
                row.visible = false;
            }
            i = close;
        } else {
            i += 1;
        }
    }
}

/// Indices of currently visible rows, in display order.
pub fn visible_indices(rows: &[TreeRow]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| r.visible)
        .map(|(i, _)| i)
        .collect()
}
