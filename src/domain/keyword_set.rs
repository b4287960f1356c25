//! KeywordSet value object.

use super::errors::ValidationError;
use std::collections::BTreeSet;

/// A non-empty, normalized set of filter keywords.
///
/// Keywords are trimmed and lowercased, and duplicates collapse. The set is
/// kept sorted so the bound SQL parameter is stable for equal inputs.
///
/// # Example
///
/// ```
/// use linkedin_network_mcp::domain::KeywordSet;
///
/// let set = KeywordSet::new(vec!["AI".to_string(), " founder ".to_string(), "ai".to_string()]).unwrap();
/// assert_eq!(set.as_slice(), &["ai".to_string(), "founder".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Build a keyword set, rejecting empty input and blank entries.
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Result<Self, ValidationError> {
        let mut normalized = BTreeSet::new();
        for keyword in keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ValidationError::BlankKeyword);
            }
            normalized.insert(keyword);
        }

        if normalized.is_empty() {
            return Err(ValidationError::EmptyKeywordSet);
        }

        Ok(Self(normalized.into_iter().collect()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
