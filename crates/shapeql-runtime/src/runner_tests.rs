use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indoc::indoc;
use serde_json::json;

use shapeql_compiler::{CompiledQuery, QueryBuilder};
use shapeql_core::Group;

use crate::{Bindings, Request, Runner, RuntimeError, Transport, TransportError};

/// Records every request body and answers with a canned response.
struct MockTransport {
    response: Result<serde_json::Value, String>,
    requests: Mutex<Vec<serde_json::Value>>,
}

impl MockTransport {
    fn ok(response: serde_json::Value) -> Self {
        Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &Request<'_>) -> Result<serde_json::Value, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(TransportError::new(message.clone())),
        }
    }
}

fn query() -> Arc<CompiledQuery> {
    let root: Group = serde_json::from_str(indoc! {r#"
        {
          "order": {
            "$op": {
              "args": { "id": ["$id", "ID!"] },
              "body": {
                "id": "ID!",
                "total": { "$op": { "field": "discountedPriceTotal", "body": "Float!" } }
              }
            }
          }
        }
    "#})
    .unwrap();
    Arc::new(QueryBuilder::new(&root).name("GetOrder").compile().unwrap())
}

fn bindings(value: serde_json::Value) -> Bindings {
    let serde_json::Value::Object(map) = value else {
        panic!("bindings must be an object");
    };
    map
}

#[tokio::test]
async fn run_sends_request_and_reshapes() {
    let transport = MockTransport::ok(json!({
        "order": {"id": "o-1", "total": 9.5}
    }));
    let runner = Runner::new(query(), transport);

    let value = runner.run(&bindings(json!({"id": "o-1"}))).await.unwrap();
    assert_eq!(value.to_json(false).unwrap(), r#"{"order":{"id":"o-1","total":9.5}}"#);

    let sent = runner.transport().requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        json!({
            "query": "query GetOrder($id: ID!) { order(id: $id) { id total: discountedPriceTotal } }",
            "operationName": "GetOrder",
            "variables": {"id": "o-1"}
        })
    );
}

#[tokio::test]
async fn binding_error_skips_transport() {
    let runner = Runner::new(query(), MockTransport::ok(json!({})));

    let err = runner.run(&Bindings::new()).await.unwrap_err();
    assert!(matches!(err, RuntimeError::MissingVariable { ref name } if name == "id"));
    assert!(runner.transport().requests().is_empty());
}

#[tokio::test]
async fn transport_error_surfaces_unmodified() {
    let runner = Runner::new(query(), MockTransport::failing("connection reset"));

    let err = runner.run(&bindings(json!({"id": "o-1"}))).await.unwrap_err();
    let RuntimeError::Transport(inner) = err else {
        panic!("expected a transport error");
    };
    assert_eq!(inner.to_string(), "connection reset");
    assert_eq!(inner.get_ref().to_string(), "connection reset");
}

#[tokio::test]
async fn one_query_many_runs() {
    let query = query();
    let transport = Arc::new(MockTransport::ok(json!({
        "order": {"id": "o-1", "total": 1.0}
    })));
    let first = Runner::new(Arc::clone(&query), Arc::clone(&transport));
    let second = Runner::new(Arc::clone(&query), Arc::clone(&transport));

    assert!(first.run(&Bindings::new()).await.is_err());
    first.run(&bindings(json!({"id": "a"}))).await.unwrap();
    second.run(&bindings(json!({"id": "b"}))).await.unwrap();

    let ids: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r["variables"]["id"].clone())
        .collect();
    assert_eq!(ids, [json!("a"), json!("b")]);
    assert_eq!(first.query(), second.query());
}
