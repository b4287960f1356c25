//! Per-call request and response envelopes.

use crate::error::{ToolError, ToolErrorKind};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single tool invocation as received from the transport.
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub tool_name: String,
    pub arguments: Value,
    pub credential: Option<String>,
}

impl ToolCall {
    pub fn new(
        tool_name: impl Into<String>,
        arguments: Map<String, Value>,
        credential: Option<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Value::Object(arguments),
            credential,
        }
    }
}

/// Sanitized error description handed to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl From<&ToolError> for ErrorPayload {
    fn from(err: &ToolError) -> Self {
        Self {
            kind: err.kind(),
            message: err.public_message(),
        }
    }
}

/// Outcome of one dispatched call: either a payload or an error, never both.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Ok { payload: Value },
    Error { error: ErrorPayload },
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Error kind, if this is a failure.
    pub fn error_kind(&self) -> Option<ToolErrorKind> {
        match self {
            Self::Ok { .. } => None,
            Self::Error { error } => Some(error.kind),
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Ok { payload } => Some(payload),
            Self::Error { .. } => None,
        }
    }
}

impl From<Result<Value, ToolError>> for ToolResult {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(payload) => Self::Ok { payload },
            Err(err) => Self::Error {
                error: ErrorPayload::from(&err),
            },
        }
    }
}
