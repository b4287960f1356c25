//! Database access: backend seams, the Postgres backend, and the connection
//! provider that owns pooling and reconnection.

pub mod postgres;
pub mod provider;
pub mod row;
pub mod traits;

pub use postgres::PgConnector;
pub use provider::{ConnectionProvider, Lease};
pub use row::{Row, RowSet, SqlValue};
pub use traits::{Connection, Connector, Pool};
