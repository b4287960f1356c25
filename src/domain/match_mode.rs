//! MatchMode value object.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a keyword filter combines the requested keywords.
///
/// - `Any`: the record's keywords intersect the requested set
/// - `All`: the record's keywords are a superset of the requested set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Any,
    All,
}

impl MatchMode {
    pub const NAMES: &'static [&'static str] = &["any", "all"];

    /// Postgres array operator implementing this mode.
    pub fn array_operator(&self) -> &'static str {
        match self {
            Self::Any => "&&",
            Self::All => "@>",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode_operators() {
        assert_eq!(MatchMode::Any.array_operator(), "&&");
        assert_eq!(MatchMode::All.array_operator(), "@>");
    }

    #[test]
    fn test_match_mode_wire_names() {
        let mode: MatchMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(mode, MatchMode::All);
        assert!(serde_json::from_str::<MatchMode>("\"some\"").is_err());
        for name in MatchMode::NAMES {
            let mode: MatchMode = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(mode.as_str(), *name);
        }
    }
}
