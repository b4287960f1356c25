//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the enumerated and set-valued
//! tool arguments. These value objects provide validation at construction time
//! and prevent invalid data from reaching the query builder.

pub mod errors;
pub mod keyword_set;
pub mod match_mode;
pub mod search_field;

pub use errors::ValidationError;
pub use keyword_set::KeywordSet;
pub use match_mode::MatchMode;
pub use search_field::SearchField;
