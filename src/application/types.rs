use super::error::NotarizationError;
use crate::domain::{verify_path, NotarizationReceipt, NotarizationRecord};
use serde::{Deserialize, Serialize};

/// Request to notarize a document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotarizeRequest {
    /// Base64-encoded document content
    pub content: String,
}

/// Request to verify a document by fingerprint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyRequest {
    /// SHA-256 fingerprint (64 hex characters, optional 0x prefix)
    pub content_hash: String,
}

/// Input action types accepted through `advance_state`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum InputAction {
    /// Notarize a new document (state-changing operation)
    Notarize { data: NotarizeRequest },

    /// Verify an existing document
    Verify { data: VerifyRequest },
}

/// Response sent as a Cartesi Notice (verifiable on-chain)
#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    #[serde(rename = "type")]
    pub response_type: &'static str,
    pub receipt: NotarizationReceipt,
    pub verify_path: String,
}

impl NoticeResponse {
    pub fn notarization(receipt: NotarizationReceipt) -> Self {
        let verify_path = receipt.verify_path();
        Self {
            response_type: "notarization_receipt",
            receipt,
            verify_path,
        }
    }
}

/// Answer to a duplicate submission. Informational, sent as a report.
#[derive(Debug, Serialize)]
pub struct DuplicateResponse {
    #[serde(rename = "type")]
    pub response_type: &'static str,
    pub record: NotarizationRecord,
    pub verify_path: String,
}

impl DuplicateResponse {
    pub fn new(record: NotarizationRecord) -> Self {
        Self {
            response_type: "already_notarized",
            verify_path: verify_path(&record.fingerprint),
            record,
        }
    }
}

/// Verification result sent as a Cartesi Report
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<NotarizationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_path: Option<String>,
}

impl ReportResponse {
    pub fn from_verification(result: Option<NotarizationRecord>) -> Self {
        Self {
            exists: result.is_some(),
            verify_path: result.as_ref().map(|r| verify_path(&r.fingerprint)),
            record: result,
        }
    }
}

/// Failure sent as a Cartesi Report
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub retryable: bool,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            retryable: false,
        }
    }
}

impl From<&NotarizationError> for ErrorResponse {
    fn from(err: &NotarizationError) -> Self {
        Self {
            error: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}
