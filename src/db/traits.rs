use crate::db::row::Row;
use crate::error::DbResult;
use crate::query::Statement;
use async_trait::async_trait;
use std::sync::Arc;

/// Opens a pool from configuration.
///
/// Abstracts over the concrete driver so the provider's reconnection policy
/// can be exercised without a live server.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Establish a new pool. Called once per (re)connect attempt.
    async fn connect(&self) -> DbResult<Arc<dyn Pool>>;
}

/// A pool of live connections.
#[async_trait]
pub trait Pool: Send + Sync {
    /// Check out one connection. It returns to the pool when dropped.
    async fn acquire(&self) -> DbResult<Box<dyn Connection>>;
}

/// A checked-out connection.
#[async_trait]
pub trait Connection: Send {
    /// Run one parameterized statement and return all rows.
    async fn fetch_all(&mut self, statement: &Statement) -> DbResult<Vec<Row>>;
}
