use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommissionRate {
    pub id: i32,
    pub product: String,
    /// Rate in basis points of the sale amount (100 bps = 1%).
    pub rate_bps: i32,
    pub effective_from: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl CommissionRate {
    /// Commission owed on a sale amount at this rate, floored to the cent.
    pub fn commission_for(&self, amount_cents: i64) -> i64 {
        amount_cents * i64::from(self.rate_bps) / 10_000
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCommissionRate {
    pub product: String,
    pub rate_bps: i32,
    pub effective_from: NaiveDate,
}

impl NewCommissionRate {
    #[must_use]
    pub fn new(product: String, rate_bps: i32, effective_from: NaiveDate) -> Self {
        Self {
            product: product.trim().to_string(),
            rate_bps,
            effective_from,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommissionEarning {
    pub id: i32,
    pub dealer_id: i32,
    pub sale_id: i32,
    /// Monthly period key, `YYYY-MM`.
    pub period: String,
    pub amount_cents: i64,
    pub status: EarningStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum EarningStatus {
    Pending,
    Approved,
    Paid,
    Other(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCommissionEarning {
    pub dealer_id: i32,
    pub sale_id: i32,
    pub period: String,
    pub amount_cents: i64,
}

impl Display for EarningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EarningStatus::Pending => write!(f, "Pending"),
            EarningStatus::Approved => write!(f, "Approved"),
            EarningStatus::Paid => write!(f, "Paid"),
            EarningStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for EarningStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => EarningStatus::Pending,
            "Approved" => EarningStatus::Approved,
            "Paid" => EarningStatus::Paid,
            _ => EarningStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for EarningStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commission_floors_to_the_cent() {
        let rate = CommissionRate {
            id: 1,
            product: "starter-pack".to_string(),
            rate_bps: 250,
            effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().into(),
        };
        assert_eq!(rate.commission_for(10_000), 250);
        assert_eq!(rate.commission_for(39), 0);
    }
}
