use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::dealer::{
    Dealer as DomainDealer, NewDealer as DomainNewDealer, NewShop as DomainNewShop,
    Shop as DomainShop, UpdateDealer as DomainUpdateDealer, UpdateShop as DomainUpdateShop,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::dealers)]
/// Diesel model for [`crate::domain::dealer::Dealer`].
pub struct Dealer {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub email: String,
    pub msisdn: String,
    pub region: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dealers)]
/// Insertable form of [`Dealer`].
pub struct NewDealer<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub msisdn: &'a str,
    pub region: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::dealers)]
/// Data used when updating a [`Dealer`] record.
pub struct UpdateDealer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub msisdn: &'a str,
    pub region: &'a str,
    pub active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::shops)]
#[diesel(belongs_to(Dealer, foreign_key = dealer_id))]
/// Diesel model for [`crate::domain::dealer::Shop`].
pub struct Shop {
    pub id: i32,
    pub dealer_id: i32,
    pub name: String,
    pub location: String,
    pub msisdn: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shops)]
pub struct NewShop<'a> {
    pub dealer_id: i32,
    pub name: &'a str,
    pub location: &'a str,
    pub msisdn: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::shops)]
pub struct UpdateShop<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub msisdn: &'a str,
}

impl From<Dealer> for DomainDealer {
    fn from(dealer: Dealer) -> Self {
        Self {
            id: dealer.id,
            code: dealer.code,
            name: dealer.name,
            email: dealer.email,
            msisdn: dealer.msisdn,
            region: dealer.region,
            active: dealer.active,
            created_at: dealer.created_at,
            updated_at: dealer.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDealer> for NewDealer<'a> {
    fn from(dealer: &'a DomainNewDealer) -> Self {
        Self {
            code: dealer.code.as_str(),
            name: dealer.name.as_str(),
            email: dealer.email.as_str(),
            msisdn: dealer.msisdn.as_str(),
            region: dealer.region.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDealer> for UpdateDealer<'a> {
    fn from(dealer: &'a DomainUpdateDealer) -> Self {
        Self {
            name: dealer.name.as_str(),
            email: dealer.email.as_str(),
            msisdn: dealer.msisdn.as_str(),
            region: dealer.region.as_str(),
            active: dealer.active,
        }
    }
}

impl From<Shop> for DomainShop {
    fn from(shop: Shop) -> Self {
        Self {
            id: shop.id,
            dealer_id: shop.dealer_id,
            name: shop.name,
            location: shop.location,
            msisdn: shop.msisdn,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewShop> for NewShop<'a> {
    fn from(shop: &'a DomainNewShop) -> Self {
        Self {
            dealer_id: shop.dealer_id,
            name: shop.name.as_str(),
            location: shop.location.as_str(),
            msisdn: shop.msisdn.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateShop> for UpdateShop<'a> {
    fn from(shop: &'a DomainUpdateShop) -> Self {
        Self {
            name: shop.name.as_str(),
            location: shop.location.as_str(),
            msisdn: shop.msisdn.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Msisdn;

    #[test]
    fn from_domain_new_creates_newdealer() {
        let domain = DomainNewDealer::new(
            "kla-01".to_string(),
            " Acme Telecom ".to_string(),
            "Sales@Acme.example".to_string(),
            Msisdn::new("0771234567").unwrap(),
            "Central".to_string(),
        );
        let new: NewDealer = (&domain).into();
        assert_eq!(new.code, "KLA-01");
        assert_eq!(new.name, "Acme Telecom");
        assert_eq!(new.email, "sales@acme.example");
        assert_eq!(new.msisdn, "256771234567");
    }

    #[test]
    fn dealer_into_domain() {
        let now = chrono::Utc::now().naive_utc();
        let db_dealer = Dealer {
            id: 7,
            code: "KLA-01".to_string(),
            name: "Acme".to_string(),
            email: "sales@acme.example".to_string(),
            msisdn: "256771234567".to_string(),
            region: "Central".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainDealer = db_dealer.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.code, "KLA-01");
        assert!(domain.active);
    }
}
