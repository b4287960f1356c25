//! LinkedIn Network MCP Server - query tools over a LinkedIn network stored in Postgres.
//!
//! The server exposes a small, fixed set of read-only tools to AI assistants
//! through the Model Context Protocol. Each call is authorized against a shared
//! secret, turned into parameterized SQL, executed through a self-healing
//! connection provider, and shaped into JSON.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **domain**: Validated value types (search fields, match modes, keyword sets)
//! - **models**: Contact records, network statistics, call envelopes
//! - **auth**: Shared-secret access gate
//! - **tools**: Tool registry, argument specs and typed parameters
//! - **query**: SQL construction for each tool
//! - **db**: Backend traits, the `sqlx` Postgres backend, the connection provider
//! - **shaper**: Row sets to tool payloads, CSV export
//! - **dispatcher**: End-to-end handling of one tool call
//! - **observability**: Counters and timers logged through `tracing`
//! - **server**: MCP protocol server over stdio

pub mod auth;
pub mod config;
pub mod db;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod query;
pub mod server;
pub mod shaper;
pub mod tools;

pub use auth::AccessGate;
pub use config::Config;
pub use db::{ConnectionProvider, PgConnector};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DbError, ToolError, ToolErrorKind};
pub use models::{ContactRecord, NetworkStats, ToolCall, ToolResult};
pub use observability::MetricsTracker;
pub use query::QueryBuilder;
pub use server::NetworkMcpServer;
pub use tools::{ToolKind, ToolRegistry, ToolRequest};
