mod error;
mod notarize;
mod service;
mod types;
mod verify;

pub use error::NotarizationError;
pub use service::NotarizationService;
pub use types::{
    DuplicateResponse, ErrorResponse, InputAction, NotarizeRequest, NoticeResponse,
    ReportResponse, VerifyRequest,
};
