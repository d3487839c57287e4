use diesel::prelude::*;

use crate::domain::stock::{NewStockItem, StockItem, StockStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StockListQuery, StockReader, StockWriter};

impl StockReader for DieselRepository {
    fn get_stock_by_imei(&self, imei: &str) -> RepositoryResult<Option<StockItem>> {
        use crate::models::stock::StockItem as DbStockItem;
        use crate::schema::stock_items;

        let mut conn = self.conn()?;
        let item = stock_items::table
            .filter(stock_items::imei.eq(imei))
            .first::<DbStockItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_stock(&self, query: StockListQuery) -> RepositoryResult<(usize, Vec<StockItem>)> {
        use crate::models::stock::StockItem as DbStockItem;
        use crate::schema::stock_items;

        let mut conn = self.conn()?;

        let build = |query: &StockListQuery| {
            let mut items = stock_items::table.into_boxed();
            if let Some(dealer_id) = query.dealer_id {
                items = items.filter(stock_items::dealer_id.eq(dealer_id));
            }
            if let Some(shop_id) = query.shop_id {
                items = items.filter(stock_items::shop_id.eq(shop_id));
            }
            if let Some(status) = &query.status {
                items = items.filter(stock_items::status.eq(status.to_string()));
            }
            if let Some(imei) = &query.imei {
                items = items.filter(stock_items::imei.like(format!("%{imei}%")));
            }
            items
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items = build(&query).order(stock_items::id.asc());
        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items = items.limit(limit).offset(offset);
        }

        let items = items
            .load::<DbStockItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<StockItem>>();

        Ok((total as usize, items))
    }
}

impl StockWriter for DieselRepository {
    fn create_stock_items(&self, new_items: &[NewStockItem]) -> RepositoryResult<usize> {
        use crate::models::stock::NewStockItem as DbNewStockItem;
        use crate::schema::stock_items;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewStockItem> = new_items.iter().map(Into::into).collect();
        let affected = diesel::insert_or_ignore_into(stock_items::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn transfer_stock(&self, shop_id: i32, item_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::stock_items;

        let mut conn = self.conn()?;
        // Sold and swapped items stay where their history says they are.
        let affected = diesel::update(
            stock_items::table
                .filter(stock_items::id.eq_any(item_ids))
                .filter(stock_items::status.eq_any([
                    StockStatus::InStock.to_string(),
                    StockStatus::Assigned.to_string(),
                ])),
        )
        .set((
            stock_items::shop_id.eq(Some(shop_id)),
            stock_items::status.eq(StockStatus::Assigned.to_string()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn mark_stock_sold(&self, item_id: i32) -> RepositoryResult<StockItem> {
        use crate::models::stock::StockItem as DbStockItem;
        use crate::schema::stock_items;

        let mut conn = self.conn()?;
        let updated = diesel::update(
            stock_items::table
                .find(item_id)
                .filter(stock_items::status.eq(StockStatus::Assigned.to_string())),
        )
        .set(stock_items::status.eq(StockStatus::Sold.to_string()))
        .get_result::<DbStockItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn swap_stock(
        &self,
        old_imei: &str,
        new_imei: &str,
    ) -> RepositoryResult<(StockItem, StockItem)> {
        use crate::models::stock::StockItem as DbStockItem;
        use crate::schema::stock_items;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let old = stock_items::table
                .filter(stock_items::imei.eq(old_imei))
                .first::<DbStockItem>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if StockStatus::from(old.status.as_str()) != StockStatus::Sold {
                return Err(RepositoryError::ValidationError(
                    "swap source must be a sold item".to_string(),
                ));
            }

            let replacement = stock_items::table
                .filter(stock_items::imei.eq(new_imei))
                .first::<DbStockItem>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if StockStatus::from(replacement.status.as_str()) != StockStatus::InStock {
                return Err(RepositoryError::ValidationError(
                    "replacement must be in stock".to_string(),
                ));
            }

            let old = diesel::update(stock_items::table.find(old.id))
                .set(stock_items::status.eq(StockStatus::Swapped.to_string()))
                .get_result::<DbStockItem>(conn)?;

            let replacement = diesel::update(stock_items::table.find(replacement.id))
                .set((
                    stock_items::status.eq(StockStatus::Sold.to_string()),
                    stock_items::shop_id.eq(old.shop_id),
                ))
                .get_result::<DbStockItem>(conn)?;

            Ok((old.into(), replacement.into()))
        })
    }
}
