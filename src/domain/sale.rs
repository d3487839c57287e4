use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Msisdn;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Sale {
    pub id: i32,
    pub dealer_id: i32,
    pub shop_id: i32,
    pub msisdn: String,
    pub product: String,
    pub amount_cents: i64,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSale {
    pub dealer_id: i32,
    pub shop_id: i32,
    pub msisdn: String,
    pub product: String,
    pub amount_cents: i64,
    pub sold_at: NaiveDateTime,
}

impl NewSale {
    #[must_use]
    pub fn new(
        dealer_id: i32,
        shop_id: i32,
        msisdn: Msisdn,
        product: String,
        amount_cents: i64,
        sold_at: NaiveDateTime,
    ) -> Self {
        Self {
            dealer_id,
            shop_id,
            msisdn: msisdn.into_inner(),
            product: product.trim().to_string(),
            amount_cents,
            sold_at,
        }
    }
}
