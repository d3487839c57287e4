use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::stock::{NewStockItem as DomainNewStockItem, StockItem as DomainStockItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::stock_items)]
/// Diesel model for [`crate::domain::stock::StockItem`].
pub struct StockItem {
    pub id: i32,
    pub imei: String,
    pub product: String,
    pub status: String,
    pub dealer_id: i32,
    pub shop_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::stock_items)]
/// Insertable form of [`StockItem`]; status defaults to `InStock`.
pub struct NewStockItem<'a> {
    pub imei: &'a str,
    pub product: &'a str,
    pub dealer_id: i32,
    pub shop_id: Option<i32>,
}

impl From<StockItem> for DomainStockItem {
    fn from(item: StockItem) -> Self {
        Self {
            id: item.id,
            imei: item.imei,
            product: item.product,
            status: item.status.into(),
            dealer_id: item.dealer_id,
            shop_id: item.shop_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStockItem> for NewStockItem<'a> {
    fn from(item: &'a DomainNewStockItem) -> Self {
        Self {
            imei: item.imei.as_str(),
            product: item.product.as_str(),
            dealer_id: item.dealer_id,
            shop_id: item.shop_id,
        }
    }
}
