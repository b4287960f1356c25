//! Driver-neutral rows.

use std::collections::BTreeMap;

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int(i64),
    Bool(bool),
    TextArray(Vec<String>),
}

/// One result row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: BTreeMap<String, SqlValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, column: impl Into<String>, value: SqlValue) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: SqlValue) {
        self.columns.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns.get(column)
    }

    /// Text value; `None` for NULL, missing, or blank text.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.columns.get(column) {
            Some(SqlValue::Text(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        match self.columns.get(column) {
            Some(SqlValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Array value; NULL and missing become an empty list.
    pub fn text_array(&self, column: &str) -> Vec<String> {
        match self.columns.get(column) {
            Some(SqlValue::TextArray(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Rows returned by one labelled statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    pub label: &'static str,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(label: &'static str, rows: Vec<Row>) -> Self {
        Self { label, rows }
    }
}
