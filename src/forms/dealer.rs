use serde::Deserialize;
use validator::Validate;

use crate::domain::dealer::{NewDealer, NewShop, UpdateDealer, UpdateShop};
use crate::domain::types::Msisdn;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for registering a new dealer.
pub struct AddDealerForm {
    /// Distribution code printed on the dealer contract.
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Contact number in national or international format.
    pub msisdn: String,
    #[validate(length(min = 1))]
    pub region: String,
}

impl AddDealerForm {
    pub fn to_new_dealer(&self) -> Result<NewDealer, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        Ok(NewDealer::new(
            self.code.clone(),
            self.name.clone(),
            self.email.clone(),
            msisdn,
            self.region.clone(),
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing dealer.
pub struct SaveDealerForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub msisdn: String,
    #[validate(length(min = 1))]
    pub region: String,
    /// Checkbox field; absent means inactive.
    #[serde(default)]
    pub active: bool,
}

impl SaveDealerForm {
    pub fn to_update_dealer(&self) -> Result<UpdateDealer, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        Ok(UpdateDealer::new(
            self.name.clone(),
            self.email.clone(),
            msisdn,
            self.region.clone(),
            self.active,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for adding a shop under a dealer.
pub struct AddShopForm {
    pub dealer_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub msisdn: String,
}

impl AddShopForm {
    pub fn to_new_shop(&self) -> Result<NewShop, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        Ok(NewShop::new(
            self.dealer_id,
            self.name.clone(),
            self.location.clone(),
            msisdn,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating a shop.
pub struct SaveShopForm {
    pub id: i32,
    /// Dealer the shop belongs to, used for the redirect back.
    pub dealer_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub msisdn: String,
}

impl SaveShopForm {
    pub fn to_update_shop(&self) -> Result<UpdateShop, FormError> {
        let msisdn = Msisdn::new(&self.msisdn).map_err(|_| FormError::InvalidMsisdn)?;
        Ok(UpdateShop::new(
            self.name.clone(),
            self.location.clone(),
            msisdn,
        ))
    }
}
