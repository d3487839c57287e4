use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::commission::NewCommissionRate;
use crate::domain::report::parse_report_date;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for adding or changing a commission rate.
pub struct SaveRateForm {
    #[validate(length(min = 1))]
    pub product: String,
    /// Basis points of the sale amount (100 = 1%).
    #[validate(range(min = 0, max = 10000))]
    pub rate_bps: i32,
    /// First day the rate applies, `YYYY-MM-DD`.
    pub effective_from: String,
}

impl SaveRateForm {
    pub fn effective_from(&self) -> Result<NaiveDate, FormError> {
        parse_report_date(&self.effective_from).ok_or(FormError::InvalidDate)
    }

    pub fn to_new_rate(&self) -> Result<NewCommissionRate, FormError> {
        Ok(NewCommissionRate::new(
            self.product.clone(),
            self.rate_bps,
            self.effective_from()?,
        ))
    }
}

#[derive(Deserialize)]
/// Status change posted from the earnings table.
pub struct EarningStatusForm {
    pub id: i32,
    pub status: String,
}
