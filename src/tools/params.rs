//! Typed tool parameters.
//!
//! The `*Params` structs are what callers see in `tools/list` (their JSON
//! schemas are generated with `schemars`). After shape validation they are
//! deserialized and refined into a [`ToolRequest`].

use super::registry::ToolKind;
use crate::domain::{KeywordSet, MatchMode, SearchField};
use crate::error::ToolError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Longest accepted free-text query or identifier.
pub const MAX_QUERY_LEN: usize = 500;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchNetworkParams {
    /// Case-insensitive text to look for. An empty string matches every contact.
    pub query: String,
    /// Restrict the search to one field: name, headline or company. Searches all three when omitted.
    #[serde(default)]
    pub field: Option<SearchField>,
    /// Maximum number of results; never more than the server cap.
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetProfileParams {
    /// Full name (case-insensitive exact match) or LinkedIn profile URL.
    pub identifier: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FilterByKeywordsParams {
    /// Keywords to filter on, e.g. ["founder", "ai"]. Must not be empty.
    pub keywords: Vec<String>,
    /// "any": contact has at least one keyword. "all": contact has every keyword.
    pub match_mode: MatchMode,
    /// Maximum number of results. Unbounded when omitted.
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub limit: Option<u32>,
}

/// Arguments of tools that take none.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

/// A fully validated tool request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    SearchNetwork {
        query: String,
        field: Option<SearchField>,
        limit: Option<usize>,
    },
    GetProfile {
        identifier: String,
    },
    FilterByKeywords {
        keywords: KeywordSet,
        match_mode: MatchMode,
        limit: Option<usize>,
    },
    AnalyzeNetwork,
    ExportNetworkCsv,
}

impl ToolRequest {
    /// Deserialize shape-checked arguments into a request for `kind`.
    pub fn from_arguments(kind: ToolKind, arguments: Map<String, Value>) -> Result<Self, ToolError> {
        let arguments = Value::Object(arguments);
        match kind {
            ToolKind::SearchNetwork => {
                let params: SearchNetworkParams = decode(arguments)?;
                let query = params.query.trim().to_string();
                if query.chars().count() > MAX_QUERY_LEN {
                    return Err(ToolError::invalid(
                        "query",
                        format!("too long (max {} characters)", MAX_QUERY_LEN),
                    ));
                }
                Ok(Self::SearchNetwork {
                    query,
                    field: params.field,
                    limit: params.limit.map(|n| n as usize),
                })
            }
            ToolKind::GetProfile => {
                let params: GetProfileParams = decode(arguments)?;
                let identifier = params.identifier.trim().to_string();
                if identifier.is_empty() {
                    return Err(ToolError::invalid("identifier", "cannot be empty"));
                }
                if identifier.chars().count() > MAX_QUERY_LEN {
                    return Err(ToolError::invalid(
                        "identifier",
                        format!("too long (max {} characters)", MAX_QUERY_LEN),
                    ));
                }
                Ok(Self::GetProfile { identifier })
            }
            ToolKind::FilterByKeywords => {
                let params: FilterByKeywordsParams = decode(arguments)?;
                let keywords = KeywordSet::new(params.keywords)
                    .map_err(|e| ToolError::invalid("keywords", e.to_string()))?;
                Ok(Self::FilterByKeywords {
                    keywords,
                    match_mode: params.match_mode,
                    limit: params.limit.map(|n| n as usize),
                })
            }
            ToolKind::AnalyzeNetwork => {
                let _: NoParams = decode(arguments)?;
                Ok(Self::AnalyzeNetwork)
            }
            ToolKind::ExportNetworkCsv => {
                let _: NoParams = decode(arguments)?;
                Ok(Self::ExportNetworkCsv)
            }
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::SearchNetwork { .. } => ToolKind::SearchNetwork,
            Self::GetProfile { .. } => ToolKind::GetProfile,
            Self::FilterByKeywords { .. } => ToolKind::FilterByKeywords,
            Self::AnalyzeNetwork => ToolKind::AnalyzeNetwork,
            Self::ExportNetworkCsv => ToolKind::ExportNetworkCsv,
        }
    }
}

// Shape validation runs first, so a failure here is a value the specs cannot
// express (e.g. an integer beyond u32).
fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid("arguments", e.to_string()))
}
