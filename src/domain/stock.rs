use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Imei;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub id: i32,
    pub imei: String,
    pub product: String,
    pub status: StockStatus,
    pub dealer_id: i32,
    /// Shop currently holding the item; `None` while it sits in the dealer
    /// warehouse.
    pub shop_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum StockStatus {
    InStock,
    Assigned,
    Sold,
    Swapped,
    Other(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStockItem {
    pub imei: String,
    pub product: String,
    pub dealer_id: i32,
    pub shop_id: Option<i32>,
}

impl NewStockItem {
    #[must_use]
    pub fn new(imei: Imei, product: String, dealer_id: i32, shop_id: Option<i32>) -> Self {
        Self {
            imei: imei.into_inner(),
            product: product.trim().to_string(),
            dealer_id,
            shop_id,
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "InStock"),
            StockStatus::Assigned => write!(f, "Assigned"),
            StockStatus::Sold => write!(f, "Sold"),
            StockStatus::Swapped => write!(f, "Swapped"),
            StockStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for StockStatus {
    fn from(s: &str) -> Self {
        match s {
            "InStock" => StockStatus::InStock,
            "Assigned" => StockStatus::Assigned,
            "Sold" => StockStatus::Sold,
            "Swapped" => StockStatus::Swapped,
            _ => StockStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for StockStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
