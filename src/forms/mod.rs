//! Form definitions backing the back-office routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod commission;
pub mod dealer;
pub mod sale;
pub mod selfcare;
pub mod stock;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid msisdn")]
    InvalidMsisdn,

    #[error("invalid imei")]
    InvalidImei,

    #[error("invalid date")]
    InvalidDate,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("csv error: {0}")]
    Csv(String),

    #[error("malformed form body: {0}")]
    Malformed(String),
}
