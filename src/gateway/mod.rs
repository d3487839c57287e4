//! REST client for the provisioning/reporting backend.
//!
//! Everything the back office cannot answer from its own database — the
//! activations report, balance checks, bundle purchases, activation
//! submissions — goes through this module. Responses are decoded into typed
//! per-endpoint rows at the boundary; 4xx rejection messages pass through
//! verbatim for display.

use thiserror::Error;

pub mod client;
pub mod session;
pub mod types;

pub use client::GatewayClient;
pub use session::ReportSession;
pub use types::{
    Activation, ActivationRequest, BalanceInfo, BundlePurchase, GatewayAck, ReportPage,
};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, TLS or timeout failure talking to the gateway.
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success status; the message is shown
    /// to the user as-is.
    #[error("gateway rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),

    #[error("unexpected gateway payload: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
