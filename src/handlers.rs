//! Rollup request handlers.
//!
//! `advance_state` may notarize; `inspect_state` only reads. Both answer
//! through notices and reports and return the status for the next
//! `/finish` call.

use crate::application::{
    DuplicateResponse, ErrorResponse, InputAction, NotarizationError, NotarizationService,
    NoticeResponse, ReportResponse, VerifyRequest,
};
use crate::domain::NotarizationReceipt;
use crate::infrastructure::cartesi::{decode_payload, send_notice, send_report, RollupClient};
use base64::Engine;
use json::JsonValue;
use serde::Serialize;
use std::error::Error;

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// The sender credited with a notarization. Missing, empty and zero
/// addresses are refused: a record is write-once and the zero owner reads
/// as "not notarized" on the verification page.
fn submitter_of(metadata: &JsonValue) -> Option<&str> {
    metadata["msg_sender"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ZERO_ADDRESS))
}

pub async fn handle_advance(
    client: &RollupClient,
    server_addr: &str,
    service: &NotarizationService,
    request: JsonValue,
) -> Result<&'static str, Box<dyn Error>> {
    let payload = match decode_payload(&request) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting undecodable advance payload");
            let response = ErrorResponse::new(format!("Invalid payload: {}", e));
            report(client, server_addr, &response).await?;
            return Ok("reject");
        }
    };
    tracing::debug!(%payload, "advance payload");

    let input: InputAction = match serde_json::from_str(&payload) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed advance input");
            let response = ErrorResponse::new(format!("Invalid input format: {}", e));
            report(client, server_addr, &response).await?;
            return Ok("reject");
        }
    };

    let metadata = &request["data"]["metadata"];
    let block_number = metadata["block_number"].as_u64().unwrap_or(0);
    let block_timestamp = metadata["timestamp"].as_i64();

    match input {
        InputAction::Notarize { data } => {
            let Some(submitter) = submitter_of(metadata) else {
                tracing::warn!("rejecting notarization without msg_sender");
                report(client, server_addr, &ErrorResponse::new("missing msg_sender")).await?;
                return Ok("reject");
            };

            let content = match base64::engine::general_purpose::STANDARD.decode(&data.content) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(error = %e, "rejecting undecodable document content");
                    let response = ErrorResponse::new(format!("Invalid base64 content: {}", e));
                    report(client, server_addr, &response).await?;
                    return Ok("reject");
                }
            };

            // Time comes from the block when the rollup supplies it.
            let result = match block_timestamp {
                Some(ts) => service.notarize_at(&content, submitter, ts),
                None => service.notarize(&content, submitter),
            };

            match result {
                Ok(record) => {
                    let receipt = NotarizationReceipt::new(&record, block_number);
                    let notice = serde_json::to_string(&NoticeResponse::notarization(receipt))?;
                    send_notice(client, server_addr, &notice).await?;
                    Ok("accept")
                }
                Err(NotarizationError::AlreadyNotarized(existing)) => {
                    report(client, server_addr, &DuplicateResponse::new(*existing)).await?;
                    Ok("accept")
                }
                Err(e) => {
                    report(client, server_addr, &ErrorResponse::from(&e)).await?;
                    Ok("reject")
                }
            }
        }
        InputAction::Verify { data } => {
            let status = verify_and_report(client, server_addr, service, &data).await?;
            Ok(if status { "accept" } else { "reject" })
        }
    }
}

pub async fn handle_inspect(
    client: &RollupClient,
    server_addr: &str,
    service: &NotarizationService,
    request: JsonValue,
) -> Result<&'static str, Box<dyn Error>> {
    let payload = match decode_payload(&request) {
        Ok(p) => p,
        Err(e) => {
            let response = ErrorResponse::new(format!("Invalid payload: {}", e));
            report(client, server_addr, &response).await?;
            return Ok("accept");
        }
    };
    tracing::debug!(%payload, "inspect payload");

    match serde_json::from_str::<VerifyRequest>(&payload) {
        Ok(verify_req) => {
            verify_and_report(client, server_addr, service, &verify_req).await?;
        }
        Err(e) => {
            let response = ErrorResponse::new(format!("Invalid request format: {}", e));
            report(client, server_addr, &response).await?;
        }
    }

    // Inspect always accepts; errors travel in the report.
    Ok("accept")
}

/// Returns whether the lookup itself succeeded.
async fn verify_and_report(
    client: &RollupClient,
    server_addr: &str,
    service: &NotarizationService,
    request: &VerifyRequest,
) -> Result<bool, Box<dyn Error>> {
    match service.verify_hex(&request.content_hash) {
        Ok(found) => {
            tracing::info!(
                content_hash = %request.content_hash,
                found = found.is_some(),
                "verification"
            );
            report(client, server_addr, &ReportResponse::from_verification(found)).await?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(content_hash = %request.content_hash, error = %e, "verification failed");
            report(client, server_addr, &ErrorResponse::from(&e)).await?;
            Ok(false)
        }
    }
}

async fn report<T: Serialize>(
    client: &RollupClient,
    server_addr: &str,
    body: &T,
) -> Result<(), Box<dyn Error>> {
    let payload = serde_json::to_string(body)?;
    send_report(client, server_addr, &payload).await
}
