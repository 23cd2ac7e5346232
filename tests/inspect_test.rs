//! Integration tests for the capture-and-echo behavior.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_get_without_body_has_null_body() {
    let (addr, _shutdown) = common::start_server().await;

    let response = reqwest::get(format!("http://{addr}/anything")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");

    let record: Value = response.json().await.unwrap();
    assert!(record["body"].is_null());
    assert_eq!(record["basic_info"]["method"], "GET");
    assert_eq!(record["basic_info"]["protocol"], "HTTP/1.1");
    assert_eq!(record["basic_info"]["server_port"], addr.port());
}

#[tokio::test]
async fn test_post_body_round_trip() {
    let (addr, _shutdown) = common::start_server().await;
    let body = "hello \u{2713} wörld";

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/submit"))
        .body(body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let record: Value = response.json().await.unwrap();
    assert_eq!(record["body"], body);
    assert_eq!(record["basic_info"]["method"], "POST");
}

#[tokio::test]
async fn test_query_parameters_preserve_order_and_repeats() {
    let (addr, _shutdown) = common::start_server().await;

    let response = reqwest::get(format!("http://{addr}/search?a=1&a=2&b=x"))
        .await
        .unwrap();
    let record: Value = response.json().await.unwrap();

    assert_eq!(record["query_parameters"], json!({"a": ["1", "2"], "b": ["x"]}));
    let keys: Vec<&String> = record["query_parameters"].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);
}

#[tokio::test]
async fn test_parsed_url_decomposition() {
    let (addr, _shutdown) = common::start_server().await;

    let response = reqwest::get(format!("http://{addr}/foo/bar?x=1")).await.unwrap();
    let record: Value = response.json().await.unwrap();

    assert_eq!(record["parsed_url"]["scheme"], "");
    assert_eq!(record["parsed_url"]["netloc"], "");
    assert_eq!(record["parsed_url"]["path"], "/foo/bar");
    assert_eq!(record["parsed_url"]["params"], "");
    assert_eq!(record["parsed_url"]["query"], "x=1");
    assert_eq!(record["parsed_url"]["fragment"], "");
    assert_eq!(record["basic_info"]["path"], "/foo/bar?x=1");
}

#[tokio::test]
async fn test_all_record_fields_present_even_when_empty() {
    let (addr, _shutdown) = common::start_server().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    let record: Value = response.json().await.unwrap();

    let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        ["timestamp", "basic_info", "parsed_url", "query_parameters", "headers", "body"]
    );
    assert_eq!(record["query_parameters"], json!({}));
    assert!(record["headers"].as_object().is_some());
}

#[tokio::test]
async fn test_headers_reported_last_one_wins() {
    let (addr, _shutdown) = common::start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/"))
        .header("x-probe", "abc")
        .header("x-dup", "one")
        .header("x-dup", "two")
        .send()
        .await
        .unwrap();
    let record: Value = response.json().await.unwrap();

    assert_eq!(record["headers"]["x-probe"], "abc");
    assert_eq!(record["headers"]["x-dup"], "two");
}

#[tokio::test]
async fn test_identical_requests_differ_only_in_timestamp() {
    let (addr, _shutdown) = common::start_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/same?k=v");

    let mut first: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let mut second: Value = client.get(&url).send().await.unwrap().json().await.unwrap();

    assert_ne!(first["timestamp"], Value::Null);
    first.as_object_mut().unwrap().remove("timestamp");
    second.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_requests_are_isolated() {
    let (addr, _shutdown) = common::start_server().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        handles.push(tokio::spawn(async move {
            let body = format!("payload-{i}");
            let client = reqwest::Client::new();
            let response = client
                .post(format!("http://{addr}/probe/{i}?marker={i}"))
                .body(body.clone())
                .send()
                .await
                .unwrap();
            let record: Value = response.json().await.unwrap();
            (i, body, record)
        }));
    }

    for handle in handles {
        let (i, body, record) = handle.await.unwrap();
        assert_eq!(record["parsed_url"]["path"], format!("/probe/{i}"));
        assert_eq!(record["query_parameters"]["marker"], json!([i.to_string()]));
        assert_eq!(record["body"], body);
    }
}
