use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{Imei, Msisdn};
use crate::forms::FormError;
use crate::gateway::types::{ActivationRequest, BundlePurchase};

#[derive(Debug, Default, Deserialize)]
/// Balance lookup submitted from the self-service page.
pub struct BalanceQuery {
    pub msisdn: Option<String>,
}

#[derive(Deserialize, Validate)]
/// Bundle purchase submitted on behalf of a subscriber.
pub struct BundleForm {
    pub msisdn: String,
    #[validate(length(min = 1))]
    pub bundle_code: String,
}

impl BundleForm {
    pub fn to_purchase(&self) -> Result<BundlePurchase, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        Ok(BundlePurchase {
            msisdn: msisdn.into_inner(),
            bundle_code: self.bundle_code.trim().to_string(),
        })
    }
}

#[derive(Deserialize, Validate)]
/// New SIM activation submitted by a shop.
pub struct ActivationForm {
    pub msisdn: String,
    pub imei: String,
    #[validate(length(min = 1))]
    pub product: String,
}

impl ActivationForm {
    pub fn to_request(&self, dealer_code: String) -> Result<ActivationRequest, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        let imei = Imei::new(&self.imei).map_err(|_| FormError::InvalidImei)?;
        Ok(ActivationRequest {
            msisdn: msisdn.into_inner(),
            imei: imei.into_inner(),
            product: self.product.trim().to_string(),
            dealer_code,
        })
    }
}
