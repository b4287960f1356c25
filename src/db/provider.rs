//! Connection provider: scoped acquisition and lazy reconnection.
//!
//! Every call gets its connection through a [`Lease`], which hands the
//! connection back to the pool when dropped, whichever way the call ends.
//! A pool found dead is discarded; the next attempt reconnects, and a
//! single call never makes more than one reconnect attempt.

use crate::db::row::{Row, RowSet};
use crate::db::traits::{Connection, Connector, Pool};
use crate::error::{DbError, DbResult};
use crate::observability::{MetricsTracker, Timer};
use crate::query::{QueryPlan, Statement};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// A checked-out connection, counted until dropped.
pub struct Lease {
    connection: Box<dyn Connection>,
    in_flight: Arc<AtomicUsize>,
    query_timeout: Duration,
    metrics: MetricsTracker,
}

impl Lease {
    /// Run one statement under the configured timeout.
    pub async fn fetch_all(&mut self, statement: &Statement) -> DbResult<Vec<Row>> {
        let timer = Timer::start();
        let rows = tokio::time::timeout(self.query_timeout, self.connection.fetch_all(statement))
            .await
            .map_err(|_| {
                DbError::timeout(format!(
                    "statement '{}' exceeded {}s",
                    statement.label,
                    self.query_timeout.as_secs()
                ))
            })??;
        self.metrics
            .track_statement(statement.label, timer.elapsed_ms(), rows.len());
        Ok(rows)
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Owns the current pool and the policy for replacing it.
pub struct ConnectionProvider {
    connector: Arc<dyn Connector>,
    pool: RwLock<Option<Arc<dyn Pool>>>,
    in_flight: Arc<AtomicUsize>,
    query_timeout: Duration,
    metrics: MetricsTracker,
}

impl ConnectionProvider {
    /// Create a provider. No connection is made until first use.
    pub fn new(
        connector: Arc<dyn Connector>,
        query_timeout: Duration,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            connector,
            pool: RwLock::new(None),
            in_flight: Arc::new(AtomicUsize::new(0)),
            query_timeout,
            metrics,
        }
    }

    /// Connect eagerly so configuration problems show up at startup.
    pub async fn warm_up(&self) -> DbResult<()> {
        if self.current_pool().await.is_none() {
            self.reconnect().await?;
        }
        Ok(())
    }

    /// Check out a connection, connecting first if there is no live pool.
    pub async fn get_connection(&self) -> DbResult<Lease> {
        let pool = match self.current_pool().await {
            Some(pool) => pool,
            None => self.reconnect().await?,
        };
        self.lease_from(&pool).await
    }

    /// Return a connection to the pool. Dropping the lease does the same.
    pub fn release(&self, lease: Lease) {
        drop(lease);
    }

    /// Run every statement of `plan` on one leased connection.
    ///
    /// A connection-class failure discards the pool. If this call has not
    /// connected yet, it reconnects once and reruns the plan (all statements
    /// are reads); otherwise the failure is returned.
    pub async fn execute(&self, plan: &QueryPlan) -> DbResult<Vec<RowSet>> {
        let mut reconnected = false;
        let mut pool = match self.current_pool().await {
            Some(pool) => pool,
            None => {
                reconnected = true;
                self.reconnect().await?
            }
        };

        loop {
            match self.run_plan(&pool, plan).await {
                Ok(sets) => return Ok(sets),
                Err(err) if err.is_connection() => {
                    self.invalidate(&pool).await;
                    if reconnected {
                        return Err(err);
                    }
                    tracing::warn!("Database connection lost, attempting one reconnect");
                    reconnected = true;
                    pool = self.reconnect().await?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Number of leases currently checked out.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether a pool is currently held.
    pub async fn is_connected(&self) -> bool {
        self.pool.read().await.is_some()
    }

    async fn run_plan(&self, pool: &Arc<dyn Pool>, plan: &QueryPlan) -> DbResult<Vec<RowSet>> {
        let mut lease = self.lease_from(pool).await?;
        let mut sets = Vec::with_capacity(plan.len());
        for statement in &plan.statements {
            let rows = lease.fetch_all(statement).await?;
            sets.push(RowSet::new(statement.label, rows));
        }
        Ok(sets)
    }

    async fn lease_from(&self, pool: &Arc<dyn Pool>) -> DbResult<Lease> {
        let connection = pool.acquire().await?;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        Ok(Lease {
            connection,
            in_flight: Arc::clone(&self.in_flight),
            query_timeout: self.query_timeout,
            metrics: self.metrics.clone(),
        })
    }

    async fn current_pool(&self) -> Option<Arc<dyn Pool>> {
        self.pool.read().await.clone()
    }

    async fn reconnect(&self) -> DbResult<Arc<dyn Pool>> {
        match self.connector.connect().await {
            Ok(pool) => {
                self.metrics.track_connect_attempt(true);
                *self.pool.write().await = Some(Arc::clone(&pool));
                tracing::info!("Database connection established");
                Ok(pool)
            }
            Err(err) => {
                self.metrics.track_connect_attempt(false);
                tracing::error!(error = %err, "Database connection attempt failed");
                Err(DbError::connection(err.message))
            }
        }
    }

    /// Drop `dead` unless another call already replaced it.
    async fn invalidate(&self, dead: &Arc<dyn Pool>) {
        let mut guard = self.pool.write().await;
        if guard.as_ref().is_some_and(|current| Arc::ptr_eq(current, dead)) {
            *guard = None;
        }
    }
}
