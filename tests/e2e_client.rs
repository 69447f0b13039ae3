
use std::future::Future;
use std::time::Duration;

use policyload::error::RequestError;
use policyload::http::{DecisionClient, HttpDecisionClient, build_endpoint, encode_request};
use policyload::input::{Method, SyntheticInput};

use support_target::{Reply, spawn_policy_server_or_skip};

fn block_on<F, T>(future: F) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("runtime build failed: {}", err))?;
    runtime.block_on(future)
}

fn sample_body() -> Result<Vec<u8>, String> {
    let input = SyntheticInput {
        method: Method::Delete,
        path: vec!["resources".to_owned(), "r-42".to_owned()],
        user: "u-7".to_owned(),
    };
    encode_request(&input).map_err(|err| format!("encode failed: {}", err))
}

fn client_for(url: &str) -> Result<HttpDecisionClient, String> {
    let endpoint =
        build_endpoint(url, "example", "allow").map_err(|err| format!("endpoint: {}", err))?;
    HttpDecisionClient::new(endpoint, Some(Duration::from_secs(5)))
        .map_err(|err| format!("client: {}", err))
}

#[test]
fn e2e_client_posts_input_and_reads_metrics() -> Result<(), String> {
    let reply = Reply::ok(
        r#"{"result": true, "metrics": {"timer_rego_query_eval_ns": 1200, "timer_server_handler_ns": 3400}}"#,
    );
    let Some((url, server)) = spawn_policy_server_or_skip(reply)? else {
        return Ok(());
    };
    let client = client_for(&url)?;

    let response = block_on(async {
        client
            .evaluate(sample_body()?)
            .await
            .map_err(|err| format!("evaluate failed: {}", err))
    })?;
    if response.metrics.get("timer_rego_query_eval_ns") != Some(&1200)
        || response.metrics.get("timer_server_handler_ns") != Some(&3400)
    {
        return Err(format!("unexpected metrics {:?}", response.metrics));
    }

    let captured = server.captured();
    let request = captured
        .first()
        .ok_or_else(|| "server saw no request".to_owned())?;
    if request.request_line != "POST /v1/data/example/allow?metrics=true HTTP/1.1" {
        return Err(format!("unexpected request line {}", request.request_line));
    }
    if !request
        .headers
        .to_ascii_lowercase()
        .contains("content-type: application/json")
    {
        return Err(format!("missing JSON content type in {}", request.headers));
    }
    let body: serde_json::Value =
        serde_json::from_str(&request.body).map_err(|err| format!("body: {}", err))?;
    let expected = serde_json::json!({
        "input": {
            "method": "DELETE",
            "path": ["resources", "r-42"],
            "user": "u-7"
        }
    });
    if body != expected {
        return Err(format!("unexpected body {}", body));
    }
    Ok(())
}

#[test]
fn e2e_client_tolerates_missing_metrics() -> Result<(), String> {
    let Some((url, _server)) = spawn_policy_server_or_skip(Reply::ok(r#"{"result": false}"#))?
    else {
        return Ok(());
    };
    let client = client_for(&url)?;
    let response = block_on(async {
        client
            .evaluate(sample_body()?)
            .await
            .map_err(|err| format!("evaluate failed: {}", err))
    })?;
    if !response.metrics.is_empty() {
        return Err(format!("expected no metrics, got {:?}", response.metrics));
    }
    Ok(())
}

#[test]
fn e2e_client_rejects_non_200_status() -> Result<(), String> {
    let Some((url, _server)) = spawn_policy_server_or_skip(Reply::status(500))? else {
        return Ok(());
    };
    let client = client_for(&url)?;
    let outcome = block_on(async { Ok(client.evaluate(sample_body()?).await) })?;
    match outcome {
        Err(RequestError::Status { status: 500, .. }) => Ok(()),
        other => Err(format!("expected status error, got {:?}", other)),
    }
}

#[test]
fn e2e_client_rejects_malformed_body() -> Result<(), String> {
    let Some((url, _server)) = spawn_policy_server_or_skip(Reply::ok("not json"))? else {
        return Ok(());
    };
    let client = client_for(&url)?;
    let outcome = block_on(async { Ok(client.evaluate(sample_body()?).await) })?;
    match outcome {
        Err(RequestError::Decode { .. }) => Ok(()),
        other => Err(format!("expected decode error, got {:?}", other)),
    }
}
