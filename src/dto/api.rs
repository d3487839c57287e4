//! Wire envelope served by the JSON endpoints.
//!
//! Mirrors the shape the provisioning gateway answers with, so API consumers
//! see one contract whether rows come from this service or upstream.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReportResponse<T> {
    pub data: Vec<T>,
    pub totalcount: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
}

impl<T> ReportResponse<T> {
    pub fn new(total: usize, data: Vec<T>) -> Self {
        Self {
            data,
            totalcount: total,
            message: None,
            status_code: None,
        }
    }
}
