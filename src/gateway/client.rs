use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::report::QueryDescriptor;
use crate::domain::types::Msisdn;
use crate::gateway::types::{
    ActivationRequest, BalanceInfo, BundlePurchase, GatewayAck, ReportEnvelope, ReportPage,
};
use crate::gateway::{GatewayError, GatewayResult};

/// Typed client for the provisioning gateway.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> GatewayResult<Self> {
        // A trailing slash makes Url::join treat the last segment as a
        // directory; endpoints are joined relative to it.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> GatewayResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))
    }

    /// Fetches one page of a report for the given request descriptor.
    pub async fn fetch_report<T: DeserializeOwned>(
        &self,
        path: &str,
        descriptor: &QueryDescriptor,
    ) -> GatewayResult<ReportPage<T>> {
        let response = self
            .http
            .get(self.endpoint(path)?)
            .query(descriptor.params())
            .send()
            .await?;

        let envelope: ReportEnvelope<T> = decode(response).await?;
        Ok(envelope.into())
    }

    pub async fn balance(&self, msisdn: &Msisdn) -> GatewayResult<BalanceInfo> {
        let response = self
            .http
            .get(self.endpoint("balance")?)
            .query(&[("msisdn", msisdn.as_str())])
            .send()
            .await?;

        decode(response).await
    }

    pub async fn purchase_bundle(&self, purchase: &BundlePurchase) -> GatewayResult<GatewayAck> {
        let response = self
            .http
            .post(self.endpoint("bundles")?)
            .json(purchase)
            .send()
            .await?;

        decode(response).await
    }

    pub async fn submit_activation(
        &self,
        request: &ActivationRequest,
    ) -> GatewayResult<GatewayAck> {
        let response = self
            .http
            .post(self.endpoint("activations")?)
            .json(request)
            .send()
            .await?;

        decode(response).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a gateway response, passing rejection messages through verbatim.
async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        return Err(GatewayError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}
