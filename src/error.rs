//! Error types for the LinkedIn Network MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Only [`ToolError`] ever crosses the transport boundary, and only through its
//! sanitized [`ToolError::public_message`].

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Failure classes reported by a database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    /// The connection (or the whole pool) is unusable; a reconnect may help.
    Connection,
    /// The statement itself failed (syntax, decode, constraint).
    Query,
    /// The statement exceeded the query timeout, or no pooled connection
    /// freed up in time.
    Timeout,
}

/// Errors raised by the connection provider and its backends.
#[derive(Error, Debug, Clone)]
#[error("{kind:?} error: {message}")]
pub struct DbError {
    pub kind: DbErrorKind,
    pub message: String,
}

impl DbError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            kind: DbErrorKind::Connection,
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self {
            kind: DbErrorKind::Query,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: DbErrorKind::Timeout,
            message: message.into(),
        }
    }

    /// Whether the failure means the pool should be thrown away.
    pub fn is_connection(&self) -> bool {
        self.kind == DbErrorKind::Connection
    }
}

/// Error kinds surfaced to the calling client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    Unauthorized,
    UnknownTool,
    InvalidArgument,
    NotFound,
    DatabaseError,
}

impl ToolErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::UnknownTool => "unknown_tool",
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::DatabaseError => "database_error",
        }
    }
}

/// Errors produced while dispatching a single tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Credential missing or not equal to the configured secret
    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    /// No tool registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not satisfy the tool's declared shape
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    /// Lookup matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection or execution failure; the inner error is never shown to callers
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl ToolError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ToolErrorKind {
        match self {
            Self::Unauthorized => ToolErrorKind::Unauthorized,
            Self::UnknownTool(_) => ToolErrorKind::UnknownTool,
            Self::InvalidArgument { .. } => ToolErrorKind::InvalidArgument,
            Self::NotFound(_) => ToolErrorKind::NotFound,
            Self::Database(_) => ToolErrorKind::DatabaseError,
        }
    }

    /// Message safe to hand to the client.
    ///
    /// Database failures are reduced to a fixed sentence so that driver text,
    /// SQL fragments and connection strings never leave the process.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(err) if err.kind == DbErrorKind::Timeout => {
                "The database query timed out. Please try again.".to_string()
            }
            Self::Database(_) => {
                "The database is currently unavailable or the query failed. Please try again."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DbError
pub type DbResult<T> = Result<T, DbError>;

/// Convenience type alias for Results with ToolError
pub type DispatchResult<T> = Result<T, ToolError>;
