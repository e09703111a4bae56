use std::sync::Arc;

use shapeql_core::spec::{group, op, scalar, var};
use shapeql_core::{ScalarKind, ScalarTable};

use crate::test_utils::parse_spec;
use crate::{CompiledQuery, Error, NameKind, QueryBuilder, ShapeKind};

#[test]
fn named_operation() {
    let root = group([("order", op(group([("id", scalar("ID!"))])).arg("id", var("$id", "ID!")).into())]);
    let query = QueryBuilder::new(&root).name("GetOrder").compile().unwrap();

    assert_eq!(query.operation_name(), Some("GetOrder"));
    insta::assert_snapshot!(query.text(), @"query GetOrder($id: ID!) { order(id: $id) { id } }");
    insta::assert_snapshot!(query.pretty(), @r"
    query GetOrder($id: ID!) {
      order(id: $id) {
        id
      }
    }
    ");
}

#[test]
fn invalid_operation_name_fails() {
    let root = group([("id", scalar("ID"))]);
    let err = QueryBuilder::new(&root).name("get order").compile().unwrap_err();

    assert_eq!(
        err,
        Error::InvalidName {
            kind: NameKind::Operation,
            name: "get order".into(),
        }
    );
}

#[test]
fn custom_scalars_drive_decode_rules() {
    let root = parse_spec(r#"{"placedAt": "DateTime!", "total": "Decimal"}"#);
    let scalars = ScalarTable::new()
        .with("DateTime", ScalarKind::Text)
        .with("Decimal", ScalarKind::Number);
    let query = QueryBuilder::new(&root).scalars(scalars).compile().unwrap();

    let kinds: Vec<_> = query
        .shape()
        .iter()
        .map(|(key, entry)| match &entry.kind {
            ShapeKind::Scalar(rule) => (key, rule.kind()),
            ShapeKind::Nested(_) => panic!("unexpected nested entry"),
        })
        .collect();
    assert_eq!(
        kinds,
        [("placedAt", ScalarKind::Text), ("total", ScalarKind::Number)]
    );
    assert_eq!(query.scalars().kind_of("Decimal"), ScalarKind::Number);
}

#[test]
fn compiled_query_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledQuery>();

    let root = parse_spec(r#"{"id": "ID"}"#);
    let query = Arc::new(QueryBuilder::new(&root).compile().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let query = Arc::clone(&query);
            std::thread::spawn(move || query.text().to_owned())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "query { id }");
    }
}

#[test]
fn failed_compilation_leaves_caller_free_to_retry() {
    let broken = parse_spec(r#"{"a": {"$op": {"args": {"x": ["x", "Int"]}, "body": "Int"}}}"#);
    assert!(QueryBuilder::new(&broken).compile().is_err());

    let fixed = parse_spec(r#"{"a": {"$op": {"args": {"x": ["$x", "Int"]}, "body": "Int"}}}"#);
    let query = QueryBuilder::new(&fixed).compile().unwrap();
    assert_eq!(query.text(), "query($x: Int) { a(x: $x) }");
}
