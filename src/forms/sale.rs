use serde::Deserialize;
use validator::Validate;

use crate::domain::types::Msisdn;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for recording a shop sale.
pub struct RecordSaleForm {
    pub shop_id: i32,
    pub msisdn: String,
    #[validate(length(min = 1))]
    pub product: String,
    /// Sale amount in cents; rejects zero and negative values.
    #[validate(range(min = 1))]
    pub amount_cents: i64,
    /// IMEI of the handset sold, when the sale moves stock.
    #[serde(default)]
    pub stock_item_id: Option<i32>,
}

impl RecordSaleForm {
    pub fn msisdn(&self) -> Result<Msisdn, FormError> {
        Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)
    }
}
