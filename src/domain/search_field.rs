//! SearchField value object.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The contact column a `search_network` query is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Headline,
    Company,
}

impl SearchField {
    /// All searchable fields, in the order they are OR-ed together.
    pub const ALL: [SearchField; 3] = [Self::Name, Self::Headline, Self::Company];

    /// Wire names accepted from callers.
    pub const NAMES: &'static [&'static str] = &["name", "headline", "company"];

    /// The flattened `people` column backing this field.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "full_name",
            Self::Headline => "headline",
            Self::Company => "current_company_name",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Headline => "headline",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_columns() {
        assert_eq!(SearchField::Name.column(), "full_name");
        assert_eq!(SearchField::Headline.column(), "headline");
        assert_eq!(SearchField::Company.column(), "current_company_name");
    }

    #[test]
    fn test_search_field_deserialization() {
        let field: SearchField = serde_json::from_str("\"headline\"").unwrap();
        assert_eq!(field, SearchField::Headline);
        assert!(serde_json::from_str::<SearchField>("\"Company\"").is_err());
        assert!(serde_json::from_str::<SearchField>("\"email\"").is_err());
    }

    #[test]
    fn test_names_match_variants() {
        for (name, field) in SearchField::NAMES.iter().zip(SearchField::ALL) {
            assert_eq!(field.as_str(), *name);
        }
    }
}
