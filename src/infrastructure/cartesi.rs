//! Output side of the Cartesi rollup HTTP API.
//!
//! Notices are verifiable on the base layer and carry notarization
//! receipts. Reports are not verifiable and carry query results and
//! diagnostics. Both are sent as `{"payload": "<hex of JSON>"}`.

use hyper::client::HttpConnector;
use hyper::{Body, Client, Method, Request, StatusCode};
use std::error::Error;

pub type RollupClient = Client<HttpConnector>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Notice,
    Report,
}

impl Output {
    fn path(self) -> &'static str {
        match self {
            Output::Notice => "notice",
            Output::Report => "report",
        }
    }
}

/// What `/finish` handed back
#[derive(Debug)]
pub enum FinishOutcome {
    /// No pending input (HTTP 202)
    Idle,
    /// Next rollup request
    Request(json::JsonValue),
}

pub async fn send_notice(
    client: &RollupClient,
    server_url: &str,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    post_output(client, server_url, Output::Notice, payload).await
}

pub async fn send_report(
    client: &RollupClient,
    server_url: &str,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    post_output(client, server_url, Output::Report, payload).await
}

async fn post_output(
    client: &RollupClient,
    server_url: &str,
    kind: Output,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    let body_json = json::object! {
        "payload" => hex::encode(payload)
    };

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{}/{}", server_url, kind.path()))
        .header("content-type", "application/json")
        .body(Body::from(body_json.dump()))?;

    let response = client.request(request).await?;

    if !response.status().is_success() {
        return Err(format!("Failed to send {}: HTTP {}", kind.path(), response.status()).into());
    }

    tracing::debug!(output = kind.path(), "rollup output sent");
    Ok(())
}

/// Reports the previous request's status and waits for the next one.
pub async fn finish(
    client: &RollupClient,
    server_url: &str,
    status: &str,
) -> Result<FinishOutcome, Box<dyn Error>> {
    let body = json::object! { "status" => status };
    let request = Request::builder()
        .method(Method::POST)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .uri(format!("{}/finish", server_url))
        .body(Body::from(body.dump()))?;

    let response = client.request(request).await?;
    tracing::debug!(status = %response.status(), "finish answered");

    if response.status() == StatusCode::ACCEPTED {
        return Ok(FinishOutcome::Idle);
    }

    let bytes = hyper::body::to_bytes(response).await?;
    let utf = std::str::from_utf8(&bytes)?;
    Ok(FinishOutcome::Request(json::parse(utf)?))
}

/// Decodes the hex `data.payload` of a rollup request into UTF-8 text.
pub fn decode_payload(request: &json::JsonValue) -> Result<String, Box<dyn Error>> {
    let payload_hex = request["data"]["payload"]
        .as_str()
        .ok_or("Missing payload")?;

    let hex_digits = payload_hex.strip_prefix("0x").unwrap_or(payload_hex);
    let bytes = hex::decode(hex_digits)?;
    Ok(String::from_utf8(bytes)?)
}
