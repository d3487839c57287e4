use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::sale::{NewSale as DomainNewSale, Sale as DomainSale};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sales)]
/// Diesel model for [`crate::domain::sale::Sale`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sales)]
pub struct NewSale<'a> {
    pub dealer_id: i32,
    pub shop_id: i32,
    pub msisdn: &'a str,
    pub product: &'a str,
    pub amount_cents: i64,
    pub sold_at: NaiveDateTime,
}

impl From<Sale> for DomainSale {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            dealer_id: sale.dealer_id,
            shop_id: sale.shop_id,
            msisdn: sale.msisdn,
            product: sale.product,
            amount_cents: sale.amount_cents,
            sold_at: sale.sold_at,
            created_at: sale.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewSale> for NewSale<'a> {
    fn from(sale: &'a DomainNewSale) -> Self {
        Self {
            dealer_id: sale.dealer_id,
            shop_id: sale.shop_id,
            msisdn: sale.msisdn.as_str(),
            product: sale.product.as_str(),
            amount_cents: sale.amount_cents,
            sold_at: sale.sold_at,
        }
    }
}
