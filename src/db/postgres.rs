//! Postgres backend built on `sqlx`.

use crate::config::Config;
use crate::db::row::{Row, SqlValue};
use crate::db::traits::{Connection, Connector, Pool};
use crate::error::{DbError, DbResult};
use crate::query::{SqlParam, Statement};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Column, Postgres, Row as _, TypeInfo};
use std::sync::Arc;
use std::time::Duration;

/// Opens `sqlx` Postgres pools.
#[derive(Clone)]
pub struct PgConnector {
    database_url: String,
    max_connections: u32,
    acquire_timeout: Duration,
}

impl PgConnector {
    pub fn new(config: &Config) -> Self {
        Self {
            database_url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            acquire_timeout: config.acquire_timeout(),
        }
    }

    /// Connector for an explicit URL, used by tests.
    pub fn with_url(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self) -> DbResult<Arc<dyn Pool>> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            // Dead connections are detected at checkout rather than mid-query
            .test_before_acquire(true)
            .connect(&self.database_url)
            .await
            .map_err(|e| DbError::connection(e.to_string()))?;

        tracing::info!(
            max_connections = self.max_connections,
            "Postgres pool established"
        );

        Ok(Arc::new(PgBackendPool { pool }))
    }
}

struct PgBackendPool {
    pool: PgPool,
}

#[async_trait]
impl Pool for PgBackendPool {
    async fn acquire(&self) -> DbResult<Box<dyn Connection>> {
        let conn = self.pool.acquire().await.map_err(classify)?;
        Ok(Box::new(PgBackendConnection { conn }))
    }
}

struct PgBackendConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl Connection for PgBackendConnection {
    async fn fetch_all(&mut self, statement: &Statement) -> DbResult<Vec<Row>> {
        let mut query = sqlx::query::<Postgres>(&statement.sql);
        for param in &statement.params {
            query = match param {
                SqlParam::Text(value) => query.bind(value.clone()),
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::TextArray(values) => query.bind(values.clone()),
            };
        }

        let rows = query.fetch_all(&mut *self.conn).await.map_err(classify)?;
        rows.iter().map(decode_row).collect()
    }
}

fn decode_row(row: &PgRow) -> DbResult<Row> {
    let mut decoded = Row::new();
    for column in row.columns() {
        let index = column.ordinal();
        let value = match column.type_info().name() {
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
                .try_get::<Option<String>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, SqlValue::Text)),
            "INT8" => row
                .try_get::<Option<i64>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, SqlValue::Int)),
            "INT4" => row
                .try_get::<Option<i32>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, |n| SqlValue::Int(i64::from(n)))),
            "INT2" => row
                .try_get::<Option<i16>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, |n| SqlValue::Int(i64::from(n)))),
            "BOOL" => row
                .try_get::<Option<bool>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, SqlValue::Bool)),
            "TEXT[]" | "VARCHAR[]" => row
                .try_get::<Option<Vec<String>>, _>(index)
                .map(|v| v.map_or(SqlValue::Null, SqlValue::TextArray)),
            other => {
                return Err(DbError::query(format!(
                    "unsupported column type {} for column {}",
                    other,
                    column.name()
                )))
            }
        }
        .map_err(classify)?;

        decoded.insert(column.name(), value);
    }
    Ok(decoded)
}

/// Map a driver error onto the provider's failure classes.
///
/// SQLSTATE class 08 (connection exception) and the 57P0x shutdown codes mean
/// the server side of the connection is gone.
fn classify(err: sqlx::Error) -> DbError {
    // Every pooled connection is busy; the pool itself is healthy.
    if matches!(err, sqlx::Error::PoolTimedOut) {
        return DbError::timeout(err.to_string());
    }

    let connection_lost = match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db) => db
            .code()
            .is_some_and(|code| code.starts_with("08") || code.starts_with("57P0")),
        _ => false,
    };

    if connection_lost {
        DbError::connection(err.to_string())
    } else {
        DbError::query(err.to_string())
    }
}
