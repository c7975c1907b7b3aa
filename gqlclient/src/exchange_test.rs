use std::sync::Mutex;

use super::*;
use crate::operation::{GraphQLRequest, GraphQLResponse, OperationContext, OperationKind};

fn operation(query: &str) -> Operation {
    let request = GraphQLRequest::new(query);
    Operation {
        key: request.key(),
        kind: OperationKind::Query,
        request,
        context: OperationContext { url: "http://localhost:3000".to_owned(), fetch_options: None },
    }
}

/// Records its name into `log` and forwards.
fn tracing_exchange(name: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> ExchangeRef {
    exchange_fn(name, move |op, forward| {
        log.lock().expect("log").push(name);
        forward.run(op)
    })
}

fn answering_exchange() -> ExchangeRef {
    exchange_fn("answer", |op, _forward| {
        let data = serde_json::json!({ "query": op.request.query });
        futures::future::ready(Ok(GraphQLResponse::from_data(data))).boxed()
    })
}

// =============================================================
// composition
// =============================================================

#[tokio::test]
async fn pipeline_runs_exchanges_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = compose_exchanges(vec![
        tracing_exchange("first", Arc::clone(&log)),
        tracing_exchange("second", Arc::clone(&log)),
        answering_exchange(),
    ]);

    let response = pipeline.run(operation("{ a }")).await.expect("answered");
    assert_eq!(response.data, Some(serde_json::json!({ "query": "{ a }" })));
    assert_eq!(*log.lock().expect("log"), vec!["first", "second"]);
}

#[tokio::test]
async fn empty_pipeline_leaves_every_operation_unhandled() {
    let pipeline = compose_exchanges(Vec::new());
    assert!(pipeline.is_empty());

    let op = operation("{ a }");
    let key = op.key;
    let err = pipeline.run(op).await.expect_err("nothing handles it");
    assert_eq!(err, ClientError::Unhandled { key, kind: OperationKind::Query });
}

#[tokio::test]
async fn forwarding_past_the_last_exchange_is_unhandled() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = compose_exchanges(vec![tracing_exchange("only", Arc::clone(&log))]);

    let err = pipeline.run(operation("{ a }")).await.expect_err("unhandled");
    assert!(matches!(err, ClientError::Unhandled { .. }));
    assert_eq!(*log.lock().expect("log"), vec!["only"]);
}

#[test]
fn pipeline_reports_names_in_order() {
    let pipeline = compose_exchanges(vec![answering_exchange(), exchange_fn("noop", |op, fwd| fwd.run(op))]);
    assert_eq!(pipeline.names(), vec!["answer", "noop"]);
    assert_eq!(pipeline.len(), 2);
    assert_eq!(format!("{pipeline:?}"), r#"Pipeline(["answer", "noop"])"#);
}

#[test]
fn forward_remaining_counts_down() {
    let exchanges: Arc<[ExchangeRef]> = vec![answering_exchange(), answering_exchange()].into();
    let forward = Forward { exchanges: Arc::clone(&exchanges), index: 1 };
    assert_eq!(forward.remaining(), 1);
    let done = Forward { exchanges, index: 2 };
    assert_eq!(done.remaining(), 0);
}
