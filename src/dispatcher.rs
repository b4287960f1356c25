//! Tool dispatch: resolve, authorize, validate, query, shape.
//!
//! Every outcome, including database failures, is folded into a
//! [`ToolResult`]; nothing a caller sends can take the process down.

use crate::auth::AccessGate;
use crate::config::Config;
use crate::db::ConnectionProvider;
use crate::error::{DispatchResult, ToolError};
use crate::models::{ToolCall, ToolResult};
use crate::observability::{MetricsTracker, Timer};
use crate::query::QueryBuilder;
use crate::shaper;
use crate::tools::{validate_arguments, ToolRegistry, ToolRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Routes tool calls to the query pipeline.
pub struct Dispatcher {
    registry: ToolRegistry,
    gate: AccessGate,
    builder: QueryBuilder,
    provider: Arc<ConnectionProvider>,
    metrics: MetricsTracker,
}

impl Dispatcher {
    pub fn new(config: &Config, provider: Arc<ConnectionProvider>, metrics: MetricsTracker) -> Self {
        Self {
            registry: ToolRegistry::new(),
            gate: AccessGate::new(config.access_key.clone()),
            builder: QueryBuilder::new(config.search_result_cap, config.stats_top_n),
            provider,
            metrics,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn provider(&self) -> &Arc<ConnectionProvider> {
        &self.provider
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Handle one call end to end.
    pub async fn dispatch(&self, call: ToolCall) -> ToolResult {
        let timer = Timer::start();
        let outcome = self.run(&call).await;

        if let Err(ToolError::Database(cause)) = &outcome {
            error!(tool = %call.tool_name, error = %cause, "Database failure during tool call");
        }
        self.metrics.track_tool_call(
            &call.tool_name,
            timer.elapsed_ms(),
            outcome.as_ref().err().map(ToolError::kind),
        );

        ToolResult::from(outcome)
    }

    async fn run(&self, call: &ToolCall) -> DispatchResult<Value> {
        let tool = self
            .registry
            .resolve(&call.tool_name)
            .ok_or_else(|| ToolError::UnknownTool(call.tool_name.clone()))?;

        if !self.gate.authorize(call.credential.as_deref()) {
            warn!(tool = %tool.name, "Rejected call with invalid or missing credential");
            return Err(ToolError::Unauthorized);
        }

        let arguments = validate_arguments(tool.kind.args(), &call.arguments)?;
        let request = ToolRequest::from_arguments(tool.kind, arguments)?;

        let plan = self.builder.build(&request);
        debug!(tool = %tool.name, statements = plan.len(), "Executing query plan");

        let sets = self.provider.execute(&plan).await?;
        shaper::shape(&request, sets)
    }
}
