use futures::FutureExt;

use super::*;
use crate::error::ClientError;
use crate::exchange::exchange_fn;
use crate::operation::GraphQLResponse;

fn echo_exchange() -> ExchangeRef {
    exchange_fn("echo", |op, _forward| {
        let data = serde_json::json!({
            "url": op.context.url,
            "kind": op.kind,
            "authorization": op.context.fetch_options.and_then(|f| f.headers.get("Authorization").cloned()),
        });
        futures::future::ready(Ok(GraphQLResponse::from_data(data))).boxed()
    })
}

// =============================================================
// construction
// =============================================================

#[test]
fn new_uses_default_pipeline_without_explicit_exchanges() {
    let client = Client::new(ClientOptions::new("http://localhost:3000"));
    assert_eq!(client.url(), "http://localhost:3000");
    assert!(client.fetch_options().is_none());
    assert_eq!(client.exchange_names(), vec!["dedup", "fetch"]);
}

#[test]
fn new_honours_explicit_exchanges() {
    let options = ClientOptions::new("http://localhost:3000").with_exchanges(vec![echo_exchange()]);
    let client = Client::new(options);
    assert_eq!(client.exchange_names(), vec!["echo"]);
}

#[test]
fn equal_options_build_distinct_instances() {
    let options = ClientOptions::new("http://localhost:3000")
        .with_fetch_options(FetchOptions::new().header("Authorization", "T"));
    let a = Client::new(options.clone());
    let b = Client::new(options);

    assert!(!a.ptr_eq(&b));
    assert_ne!(a.id(), b.id());
    assert_eq!(a.url(), b.url());
    assert_eq!(a.fetch_options(), b.fetch_options());
}

#[test]
fn clones_share_the_instance() {
    let a = Client::new(ClientOptions::new("http://localhost:3000"));
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.id(), b.id());
}

#[test]
fn builder_collects_fetch_options() {
    let client = Client::builder("https://api.example.com/graphql")
        .bearer_auth("tok")
        .header("X-Trace", "1")
        .credentials(Credentials::Include)
        .build();

    let fetch = client.fetch_options().expect("fetch options");
    assert_eq!(fetch.headers.get("Authorization").map(String::as_str), Some("Bearer tok"));
    assert_eq!(fetch.headers.get("X-Trace").map(String::as_str), Some("1"));
    assert_eq!(fetch.credentials, Some(Credentials::Include));
}

#[test]
fn builder_without_fetch_settings_leaves_them_unset() {
    let options = Client::builder("http://localhost:3000").into_options();
    assert_eq!(options, ClientOptions::new("http://localhost:3000"));
}

#[test]
fn options_snapshot_matches_construction_input() {
    let options = ClientOptions::new("http://localhost:3000")
        .with_fetch_options(FetchOptions::new().credentials(Credentials::SameOrigin));
    let client = Client::new(options.clone());
    assert_eq!(client.options(), options);
}

// =============================================================
// options equality + serde
// =============================================================

#[test]
fn options_equality_compares_exchange_names() {
    let plain = ClientOptions::new("http://localhost:3000");
    let explicit = plain.clone().with_exchanges(vec![echo_exchange()]);
    let explicit_again = plain.clone().with_exchanges(vec![echo_exchange()]);

    assert_ne!(plain, explicit);
    assert_eq!(explicit, explicit_again);
}

#[test]
fn options_serialize_without_exchanges() {
    let options = ClientOptions::new("http://localhost:3000")
        .with_fetch_options(FetchOptions::new().header("Authorization", "T"))
        .with_exchanges(vec![echo_exchange()]);

    let json = serde_json::to_value(&options).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "url": "http://localhost:3000",
            "fetchOptions": { "headers": { "Authorization": "T" } }
        })
    );

    let back: ClientOptions = serde_json::from_value(json).expect("deserialize");
    assert!(back.exchanges.is_none());
    assert_eq!(back.fetch_options, options.fetch_options);
}

#[test]
fn credentials_parse_fetch_spelling() {
    assert_eq!(Credentials::parse("same-origin"), Some(Credentials::SameOrigin));
    assert_eq!(Credentials::parse("include"), Some(Credentials::Include));
    assert_eq!(Credentials::parse("always"), None);
}

// =============================================================
// operations
// =============================================================

#[test]
fn operation_keys_follow_query_and_variables() {
    let a = GraphQLRequest::new("query Q($id: ID!) { node(id: $id) { id } }").variables(serde_json::json!({ "id": 1 })).expect("variables");
    let b = GraphQLRequest::new("query Q($id: ID!) { node(id: $id) { id } }").variables(serde_json::json!({ "id": 1 })).expect("variables");
    let c = GraphQLRequest::new("query Q($id: ID!) { node(id: $id) { id } }").variables(serde_json::json!({ "id": 2 })).expect("variables");
    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());
}

#[test]
fn variables_without_a_json_form_are_an_error() {
    let mut tuple_keys = std::collections::HashMap::new();
    tuple_keys.insert((1, 2), "x");

    let err = GraphQLRequest::new("query Q($m: M) { a(m: $m) }").variables(tuple_keys).unwrap_err();
    assert!(err.to_string().contains("key must be a string"));
}

#[test]
fn request_serializes_operation_name_in_camel_case() {
    let request = GraphQLRequest::new("{ a }").operation_name("A");
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json, serde_json::json!({ "query": "{ a }", "operationName": "A" }));
}

#[tokio::test]
async fn query_runs_through_pipeline_with_client_context() {
    let client = Client::builder("http://localhost:3000")
        .header("Authorization", "T")
        .exchanges(vec![echo_exchange()])
        .build();

    let response = client.query(GraphQLRequest::new("{ a }")).await.expect("echo");
    assert_eq!(
        response.data,
        Some(serde_json::json!({ "url": "http://localhost:3000", "kind": "query", "authorization": "T" }))
    );
}

#[tokio::test]
async fn empty_exchange_list_fails_operations() {
    let client = Client::builder("http://localhost:3000").exchanges(Vec::new()).build();
    let err = client
        .mutation(GraphQLRequest::new("mutation { a }"))
        .await
        .expect_err("no exchanges");
    assert!(matches!(err, ClientError::Unhandled { kind: OperationKind::Mutation, .. }));
}

#[tokio::test]
async fn subscriptions_fall_through_default_pipeline() {
    let client = Client::new(ClientOptions::new("http://localhost:3000"));
    let op = client.create_request_operation(OperationKind::Subscription, GraphQLRequest::new("subscription { a }"));
    let err = client.execute(op).await.expect_err("no subscription transport");
    assert!(matches!(err, ClientError::Unhandled { kind: OperationKind::Subscription, .. }));
}
