//! Data models for the contact network.
//!
//! This module contains the contact record as returned to callers, the
//! aggregate statistics structure, and the per-call request/response envelopes.

pub mod contact;
pub mod stats;
pub mod tool_call;

pub use contact::{ContactRecord, CurrentCompany};
pub use stats::{NetworkStats, RankedValue};
pub use tool_call::{ErrorPayload, ToolCall, ToolResult};
