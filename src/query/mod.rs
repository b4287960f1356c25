//! Query construction.
//!
//! Turns validated tool requests into parameterized SQL against the `people`
//! table. Values are always bound as `$n` parameters; the only text spliced
//! into SQL comes from fixed column and operator constants.

pub mod builder;
pub mod statement;

pub use builder::{labels, QueryBuilder, CONTACT_COLUMNS};
pub use statement::{escape_like, QueryPlan, SqlParam, Statement};
