//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The keyword set contains no keywords.
    EmptyKeywordSet,

    /// A keyword is blank after trimming.
    BlankKeyword,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeywordSet => write!(f, "at least one keyword is required"),
            Self::BlankKeyword => write!(f, "keywords cannot be blank"),
        }
    }
}

impl std::error::Error for ValidationError {}
