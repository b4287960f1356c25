//! MCP handler for the LinkedIn network server.
//!
//! Tools are listed from the registry and every call is forwarded to the
//! [`Dispatcher`], so argument checking and authorization happen in one place.

use crate::dispatcher::Dispatcher;
use crate::models::{ToolCall, ToolResult};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

/// Meta keys that may carry the caller's credential.
const CREDENTIAL_META_KEYS: [&str; 2] = ["api_key", "x-api-key"];

/// The MCP server exposing network query tools.
#[derive(Clone)]
pub struct NetworkMcpServer {
    dispatcher: Arc<Dispatcher>,
    fallback_credential: Option<String>,
}

impl NetworkMcpServer {
    /// # Arguments
    /// * `dispatcher` - Shared dispatcher handling every call
    /// * `fallback_credential` - Used when a request carries no credential of its own
    pub fn new(dispatcher: Arc<Dispatcher>, fallback_credential: Option<String>) -> Self {
        Self {
            dispatcher,
            fallback_credential,
        }
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Tool descriptors as advertised in `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .registry()
            .definitions()
            .iter()
            .map(|def| Tool::new(def.name, def.description, Arc::clone(&def.input_schema)))
            .collect()
    }

    /// Pick the credential for a call: request meta first, then the fallback.
    pub fn resolve_credential(&self, meta: &JsonObject) -> Option<String> {
        credential_from_meta(meta).or_else(|| self.fallback_credential.clone())
    }

    /// Dispatch a call and wrap the outcome for the transport.
    pub async fn handle_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        credential: Option<String>,
    ) -> CallToolResult {
        let call = ToolCall::new(name, arguments.unwrap_or_default(), credential);
        to_call_tool_result(&self.dispatcher.dispatch(call).await)
    }
}

impl ServerHandler for NetworkMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "linkedin-network-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a LinkedIn network stored in Postgres - search contacts, look up profiles, filter by keywords, summarize and export the network.".into()),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(self.tools())) }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let credential = self.resolve_credential(&context.meta);
            Ok(self
                .handle_call(&request.name, request.arguments, credential)
                .await)
        }
    }
}

fn credential_from_meta(meta: &JsonObject) -> Option<String> {
    CREDENTIAL_META_KEYS
        .iter()
        .filter_map(|key| meta.get(*key).and_then(Value::as_str))
        .map(|raw| raw.trim())
        .map(|raw| raw.strip_prefix("Bearer ").unwrap_or(raw).trim())
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

/// Tool failures travel as an error result, never as a protocol error.
fn to_call_tool_result(result: &ToolResult) -> CallToolResult {
    let body = serde_json::to_string_pretty(result)
        .unwrap_or_else(|_| r#"{"status":"error"}"#.to_string());
    if result.is_error() {
        CallToolResult::error(vec![Content::text(body)])
    } else {
        CallToolResult::success(vec![Content::text(body)])
    }
}
