//! Wire types for the provisioning gateway.
//!
//! Row shapes are declared per endpoint instead of passing opaque JSON
//! through to the templates; decoding failures surface at the boundary.

use serde::{Deserialize, Serialize};

/// Envelope every report endpoint answers with.
#[derive(Clone, Debug, Deserialize)]
pub struct ReportEnvelope<T> {
    pub data: Vec<T>,
    #[serde(rename = "totalcount")]
    pub total_count: usize,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<i32>,
}

/// One decoded page of a report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportPage<T> {
    pub rows: Vec<T>,
    pub total_count: usize,
}

impl<T> From<ReportEnvelope<T>> for ReportPage<T> {
    fn from(envelope: ReportEnvelope<T>) -> Self {
        Self {
            rows: envelope.data,
            total_count: envelope.total_count,
        }
    }
}

/// Row of the `/activations` report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Activation {
    pub msisdn: String,
    #[serde(default)]
    pub bnumber: Option<String>,
    #[serde(default)]
    pub imei: Option<String>,
    pub product: String,
    pub status: String,
    #[serde(default)]
    pub dealer_code: Option<String>,
    pub activated_at: String,
}

/// Answer to a balance check.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BalanceInfo {
    pub msisdn: String,
    pub balance: String,
    pub currency: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Bundle purchase submitted on behalf of a subscriber.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BundlePurchase {
    pub msisdn: String,
    pub bundle_code: String,
}

/// New SIM activation submitted by a shop.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivationRequest {
    pub msisdn: String,
    pub imei: String,
    pub product: String,
    pub dealer_code: String,
}

/// Acknowledgement for write operations (bundles, activations).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GatewayAck {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<i32>,
}
