use async_trait::async_trait;
use linkedin_network_mcp::db::{Connection, Connector, Pool, Row, SqlValue};
use linkedin_network_mcp::error::{DbError, DbResult};
use linkedin_network_mcp::query::Statement;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct State {
    rows: HashMap<&'static str, Vec<Row>>,
    executed: Vec<Statement>,
    connects: usize,
    acquires: usize,
    open_connections: usize,
    failing_connects: usize,
    scripted_errors: VecDeque<DbError>,
    delay: Option<Duration>,
}

/// In-memory database backend for testing.
///
/// Canned rows are returned per statement label. Connection failures and
/// slow statements can be scripted, and every connect, acquire and statement
/// is recorded for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDatabase {
    state: Arc<Mutex<State>>,
}

#[allow(dead_code)]
impl MockDatabase {
    /// Create a new empty MockDatabase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned for statements carrying `label`.
    pub fn set_rows(&self, label: &'static str, rows: Vec<Row>) {
        self.state.lock().unwrap().rows.insert(label, rows);
    }

    /// Make the next `n` connect attempts fail.
    pub fn fail_next_connects(&self, n: usize) {
        self.state.lock().unwrap().failing_connects = n;
    }

    /// Fail the next statement with `err` (queued, one per statement).
    pub fn fail_next_statement(&self, err: DbError) {
        self.state.lock().unwrap().scripted_errors.push_back(err);
    }

    /// Delay every statement by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    pub fn connector(&self) -> Arc<dyn Connector> {
        Arc::new(MockConnector {
            state: Arc::clone(&self.state),
        })
    }

    pub fn connect_count(&self) -> usize {
        self.state.lock().unwrap().connects
    }

    pub fn acquire_count(&self) -> usize {
        self.state.lock().unwrap().acquires
    }

    /// Connections currently checked out of any pool.
    pub fn open_connections(&self) -> usize {
        self.state.lock().unwrap().open_connections
    }

    pub fn statement_count(&self) -> usize {
        self.state.lock().unwrap().executed.len()
    }

    pub fn executed_labels(&self) -> Vec<&'static str> {
        self.state
            .lock()
            .unwrap()
            .executed
            .iter()
            .map(|s| s.label)
            .collect()
    }

    pub fn last_statement(&self) -> Option<Statement> {
        self.state.lock().unwrap().executed.last().cloned()
    }
}

struct MockConnector {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self) -> DbResult<Arc<dyn Pool>> {
        let mut state = self.state.lock().unwrap();
        state.connects += 1;
        if state.failing_connects > 0 {
            state.failing_connects -= 1;
            return Err(DbError::connection("connection refused"));
        }
        Ok(Arc::new(MockPool {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockPool {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Pool for MockPool {
    async fn acquire(&self) -> DbResult<Box<dyn Connection>> {
        let mut state = self.state.lock().unwrap();
        state.acquires += 1;
        state.open_connections += 1;
        Ok(Box::new(MockConnection {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockConnection {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Connection for MockConnection {
    async fn fetch_all(&mut self, statement: &Statement) -> DbResult<Vec<Row>> {
        let delay = self.state.lock().unwrap().delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().unwrap();
        state.executed.push(statement.clone());
        if let Some(err) = state.scripted_errors.pop_front() {
            return Err(err);
        }
        Ok(state.rows.get(statement.label).cloned().unwrap_or_default())
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.open_connections -= 1;
        }
    }
}

/// A contact row with every column present.
#[allow(dead_code)]
pub fn contact_row(name: &str, company: Option<&str>, keywords: &[&str]) -> Row {
    let text = |s: &str| SqlValue::Text(s.to_string());
    Row::new()
        .with("full_name", text(name))
        .with("headline", text(&format!("{} at work", name)))
        .with("location", text("Berlin"))
        .with(
            "linkedin_url",
            text(&format!(
                "https://linkedin.com/in/{}",
                name.to_lowercase().replace(' ', "-")
            )),
        )
        .with("current_company_title", SqlValue::Null)
        .with("current_company_name", company.map_or(SqlValue::Null, text))
        .with("current_company_industry", SqlValue::Null)
        .with("skills_top", SqlValue::TextArray(vec!["rust".to_string()]))
        .with(
            "keywords",
            SqlValue::TextArray(keywords.iter().map(|k| k.to_string()).collect()),
        )
}
