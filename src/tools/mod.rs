//! MCP tools exposed over the contact network.
//!
//! This module provides:
//! - **registry**: tool names, descriptions and published JSON schemas
//! - **schema**: declared argument shapes and their validation
//! - **params**: typed parameters and the validated [`ToolRequest`]

pub mod params;
pub mod registry;
pub mod schema;

pub use params::{
    FilterByKeywordsParams, GetProfileParams, NoParams, SearchNetworkParams, ToolRequest,
};
pub use registry::{ToolDefinition, ToolKind, ToolRegistry};
pub use schema::{validate_arguments, ArgSpec, ArgType};
