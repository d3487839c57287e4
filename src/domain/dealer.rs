use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Msisdn;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Dealer {
    pub id: i32,
    /// Short distribution code printed on contracts, unique per dealer.
    pub code: String,
    pub name: String,
    pub email: String,
    pub msisdn: String,
    pub region: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDealer {
    pub code: String,
    pub name: String,
    pub email: String,
    pub msisdn: String,
    pub region: String,
}

impl NewDealer {
    #[must_use]
    pub fn new(code: String, name: String, email: String, msisdn: Msisdn, region: String) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            msisdn: msisdn.into_inner(),
            region: region.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDealer {
    pub name: String,
    pub email: String,
    pub msisdn: String,
    pub region: String,
    pub active: bool,
}

impl UpdateDealer {
    #[must_use]
    pub fn new(name: String, email: String, msisdn: Msisdn, region: String, active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            msisdn: msisdn.into_inner(),
            region: region.trim().to_string(),
            active,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Shop {
    pub id: i32,
    pub dealer_id: i32,
    pub name: String,
    pub location: String,
    pub msisdn: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewShop {
    pub dealer_id: i32,
    pub name: String,
    pub location: String,
    pub msisdn: String,
}

impl NewShop {
    #[must_use]
    pub fn new(dealer_id: i32, name: String, location: String, msisdn: Msisdn) -> Self {
        Self {
            dealer_id,
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            msisdn: msisdn.into_inner(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateShop {
    pub name: String,
    pub location: String,
    pub msisdn: String,
}

impl UpdateShop {
    #[must_use]
    pub fn new(name: String, location: String, msisdn: Msisdn) -> Self {
        Self {
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            msisdn: msisdn.into_inner(),
        }
    }
}
