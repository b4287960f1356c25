//! Tests for the MCP handler layer: tool listing, credential resolution and
//! how dispatch outcomes are wrapped for the transport.

mod mocks;

use linkedin_network_mcp::db::ConnectionProvider;
use linkedin_network_mcp::query::labels;
use linkedin_network_mcp::{Config, Dispatcher, MetricsTracker, NetworkMcpServer};
use mocks::{contact_row, MockDatabase};
use rmcp::model::{CallToolResult, JsonObject};
use rmcp::ServerHandler;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const SECRET: &str = "server-secret";

fn server(db: &MockDatabase, fallback: Option<&str>) -> NetworkMcpServer {
    let config = Config {
        access_key: SECRET.to_string(),
        ..Default::default()
    };
    let metrics = MetricsTracker::new();
    let provider = Arc::new(ConnectionProvider::new(
        db.connector(),
        Duration::from_secs(5),
        metrics.clone(),
    ));
    let dispatcher = Arc::new(Dispatcher::new(&config, provider, metrics));
    NetworkMcpServer::new(dispatcher, fallback.map(str::to_string))
}

fn body(result: &CallToolResult) -> Value {
    let wire = serde_json::to_value(result).unwrap();
    let text = wire["content"][0]["text"]
        .as_str()
        .expect("result carries text content");
    serde_json::from_str(text).unwrap()
}

fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

#[test]
fn test_server_info() {
    let info = server(&MockDatabase::new(), None).get_info();
    assert_eq!(info.server_info.name, "linkedin-network-mcp");
    assert!(info.capabilities.tools.is_some());
}

#[test]
fn test_lists_all_tools_with_schemas() {
    let tools = server(&MockDatabase::new(), None).tools();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(
        names,
        vec![
            "search_network",
            "get_profile",
            "filter_by_keywords",
            "analyze_network",
            "export_network_csv"
        ]
    );
    for tool in &tools {
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
    }
}

#[test]
fn test_request_credential_wins_over_fallback() {
    let server = server(&MockDatabase::new(), Some("from-env"));

    let meta = object(json!({"x-api-key": "Bearer from-request"}));
    assert_eq!(server.resolve_credential(&meta).as_deref(), Some("from-request"));
    assert_eq!(
        server.resolve_credential(&JsonObject::new()).as_deref(),
        Some("from-env")
    );
}

#[tokio::test]
async fn test_successful_call_result() {
    let db = MockDatabase::new();
    db.set_rows(labels::CONTACTS, vec![contact_row("Ada", Some("Acme"), &[])]);
    let server = server(&db, None);

    let result = server
        .handle_call(
            "search_network",
            Some(object(json!({"query": "ada"}))),
            Some(SECRET.to_string()),
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    let body = body(&result);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["payload"]["count"], 1);
}

#[tokio::test]
async fn test_failed_call_is_error_result() {
    let db = MockDatabase::new();
    let server = server(&db, None);

    let result = server.handle_call("analyze_network", None, None).await;

    assert_eq!(result.is_error, Some(true));
    let body = body(&result);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["kind"], "unauthorized");
    assert_eq!(db.statement_count(), 0);
}

#[tokio::test]
async fn test_fallback_credential_authorizes_local_calls() {
    let db = MockDatabase::new();
    let server = server(&db, Some(SECRET));

    let credential = server.resolve_credential(&JsonObject::new());
    let result = server
        .handle_call("export_network_csv", None, credential)
        .await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(body(&result)["payload"]["count"], 0);
}
