//! Tool registry: names, descriptions, argument specs and published schemas.

use super::params::{FilterByKeywordsParams, GetProfileParams, NoParams, SearchNetworkParams};
use super::schema::{ArgSpec, ArgType};
use crate::domain::{MatchMode, SearchField};
use schemars::JsonSchema;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SearchNetwork,
    GetProfile,
    FilterByKeywords,
    AnalyzeNetwork,
    ExportNetworkCsv,
}

/// Row limits decode into `u32`.
const LIMIT: ArgType = ArgType::Integer {
    min: 1,
    max: u32::MAX as i64,
};

const SEARCH_NETWORK_ARGS: &[ArgSpec] = &[
    ArgSpec::required("query", ArgType::String),
    ArgSpec::optional("field", ArgType::Enum(SearchField::NAMES)),
    ArgSpec::optional("limit", LIMIT),
];

const GET_PROFILE_ARGS: &[ArgSpec] = &[ArgSpec::required("identifier", ArgType::String)];

const FILTER_BY_KEYWORDS_ARGS: &[ArgSpec] = &[
    ArgSpec::required("keywords", ArgType::StringList),
    ArgSpec::required("match_mode", ArgType::Enum(MatchMode::NAMES)),
    ArgSpec::optional("limit", LIMIT),
];

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        Self::SearchNetwork,
        Self::GetProfile,
        Self::FilterByKeywords,
        Self::AnalyzeNetwork,
        Self::ExportNetworkCsv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchNetwork => "search_network",
            Self::GetProfile => "get_profile",
            Self::FilterByKeywords => "filter_by_keywords",
            Self::AnalyzeNetwork => "analyze_network",
            Self::ExportNetworkCsv => "export_network_csv",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SearchNetwork => "Search your LinkedIn network by name, headline or company (case-insensitive substring). Exact matches are listed first, then by name. Results are capped.",
            Self::GetProfile => "Get the full profile of one contact by exact full name (case-insensitive) or LinkedIn URL.",
            Self::FilterByKeywords => "List contacts tagged with keywords. match_mode \"any\" returns contacts with at least one of the keywords, \"all\" returns contacts with every keyword.",
            Self::AnalyzeNetwork => "Summarize the network: total contacts, distinct companies, and the most common keywords, locations and companies.",
            Self::ExportNetworkCsv => "Export every contact in the network as CSV text.",
        }
    }

    /// Declared argument shape checked at dispatch time.
    pub fn args(&self) -> &'static [ArgSpec] {
        match self {
            Self::SearchNetwork => SEARCH_NETWORK_ARGS,
            Self::GetProfile => GET_PROFILE_ARGS,
            Self::FilterByKeywords => FILTER_BY_KEYWORDS_ARGS,
            Self::AnalyzeNetwork | Self::ExportNetworkCsv => &[],
        }
    }

    /// JSON schema advertised to clients.
    pub fn input_schema(&self) -> Map<String, Value> {
        match self {
            Self::SearchNetwork => schema_object::<SearchNetworkParams>(),
            Self::GetProfile => schema_object::<GetProfileParams>(),
            Self::FilterByKeywords => schema_object::<FilterByKeywordsParams>(),
            Self::AnalyzeNetwork | Self::ExportNetworkCsv => schema_object::<NoParams>(),
        }
    }
}

fn schema_object<T: JsonSchema>() -> Map<String, Value> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut map = Map::new();
            map.insert("type".to_string(), Value::String("object".to_string()));
            map
        }
    }
}

/// A registered tool as published to the transport.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub kind: ToolKind,
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Arc<Map<String, Value>>,
}

/// Name → tool lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let tools = ToolKind::ALL
            .iter()
            .map(|kind| ToolDefinition {
                kind: *kind,
                name: kind.name(),
                description: kind.description(),
                input_schema: Arc::new(kind.input_schema()),
            })
            .collect();
        Self { tools }
    }

    pub fn resolve(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
