use diesel::prelude::*;

use crate::domain::dealer::{Dealer, NewDealer, NewShop, Shop, UpdateDealer, UpdateShop};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DealerListQuery, DealerReader, DealerWriter, DieselRepository};

impl DealerReader for DieselRepository {
    fn get_dealer_by_id(&self, id: i32) -> RepositoryResult<Option<Dealer>> {
        use crate::models::dealer::Dealer as DbDealer;
        use crate::schema::dealers;

        let mut conn = self.conn()?;
        let dealer = dealers::table
            .find(id)
            .first::<DbDealer>(&mut conn)
            .optional()?;

        Ok(dealer.map(Into::into))
    }

    fn get_dealer_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>> {
        use crate::models::dealer::Dealer as DbDealer;
        use crate::schema::dealers;

        let mut conn = self.conn()?;
        let dealer = dealers::table
            .filter(dealers::email.eq(email.to_lowercase()))
            .first::<DbDealer>(&mut conn)
            .optional()?;

        Ok(dealer.map(Into::into))
    }

    fn list_dealers(&self, query: DealerListQuery) -> RepositoryResult<(usize, Vec<Dealer>)> {
        use crate::models::dealer::Dealer as DbDealer;
        use crate::schema::dealers;

        let mut conn = self.conn()?;

        let build = |query: &DealerListQuery| {
            let mut items = dealers::table.into_boxed();
            if !query.include_inactive {
                items = items.filter(dealers::active.eq(true));
            }
            if let Some(term) = &query.search {
                let pattern = format!("%{term}%");
                items = items.filter(
                    dealers::name
                        .like(pattern.clone())
                        .or(dealers::code.like(pattern.clone()))
                        .or(dealers::msisdn.like(pattern.clone()))
                        .or(dealers::email.like(pattern)),
                );
            }
            items
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items = build(&query).order(dealers::id.asc());
        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items = items.limit(limit).offset(offset);
        }

        let items = items
            .load::<DbDealer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Dealer>>();

        Ok((total as usize, items))
    }

    fn get_shop_by_id(&self, id: i32) -> RepositoryResult<Option<Shop>> {
        use crate::models::dealer::Shop as DbShop;
        use crate::schema::shops;

        let mut conn = self.conn()?;
        let shop = shops::table.find(id).first::<DbShop>(&mut conn).optional()?;

        Ok(shop.map(Into::into))
    }

    fn list_shops(&self, dealer_id: i32) -> RepositoryResult<Vec<Shop>> {
        use crate::models::dealer::Shop as DbShop;
        use crate::schema::shops;

        let mut conn = self.conn()?;
        let shops = shops::table
            .filter(shops::dealer_id.eq(dealer_id))
            .order(shops::id.asc())
            .load::<DbShop>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(shops)
    }
}

impl DealerWriter for DieselRepository {
    fn create_dealer(&self, new_dealer: &NewDealer) -> RepositoryResult<Dealer> {
        use crate::models::dealer::{Dealer as DbDealer, NewDealer as DbNewDealer};
        use crate::schema::dealers;

        let mut conn = self.conn()?;
        let insertable: DbNewDealer = new_dealer.into();
        let created = diesel::insert_into(dealers::table)
            .values(&insertable)
            .get_result::<DbDealer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_dealer(&self, dealer_id: i32, updates: &UpdateDealer) -> RepositoryResult<Dealer> {
        use crate::models::dealer::{Dealer as DbDealer, UpdateDealer as DbUpdateDealer};
        use crate::schema::dealers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDealer = updates.into();

        let updated = diesel::update(dealers::table.find(dealer_id))
            .set(&db_updates)
            .get_result::<DbDealer>(&mut conn)?;

        Ok(updated.into())
    }

    fn deactivate_dealer(&self, dealer_id: i32) -> RepositoryResult<()> {
        use crate::schema::dealers;

        let mut conn = self.conn()?;
        let affected = diesel::update(dealers::table.find(dealer_id))
            .set(dealers::active.eq(false))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn create_shop(&self, new_shop: &NewShop) -> RepositoryResult<Shop> {
        use crate::models::dealer::{NewShop as DbNewShop, Shop as DbShop};
        use crate::schema::shops;

        let mut conn = self.conn()?;
        let insertable: DbNewShop = new_shop.into();
        let created = diesel::insert_into(shops::table)
            .values(&insertable)
            .get_result::<DbShop>(&mut conn)?;

        Ok(created.into())
    }

    fn update_shop(&self, shop_id: i32, updates: &UpdateShop) -> RepositoryResult<Shop> {
        use crate::models::dealer::{Shop as DbShop, UpdateShop as DbUpdateShop};
        use crate::schema::shops;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateShop = updates.into();

        let updated = diesel::update(shops::table.find(shop_id))
            .set(&db_updates)
            .get_result::<DbShop>(&mut conn)?;

        Ok(updated.into())
    }
}
