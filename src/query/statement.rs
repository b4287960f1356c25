//! SQL statements and their bound parameters.

/// A value bound to a positional `$n` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    TextArray(Vec<String>),
}

/// One parameterized statement, labelled so the shaper can find its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub label: &'static str,
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    pub fn new(label: &'static str, sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            label,
            sql: sql.into(),
            params,
        }
    }
}

/// The statements needed to answer one tool call, run in order on one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub statements: Vec<Statement>,
}

impl QueryPlan {
    pub fn single(statement: Statement) -> Self {
        Self {
            statements: vec![statement],
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Escape LIKE metacharacters so user text matches literally.
///
/// Pairs with `ESCAPE '\'` in the generated predicate.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
