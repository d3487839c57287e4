use chrono::NaiveTime;
use diesel::prelude::*;

use crate::domain::sale::{NewSale, Sale};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SaleListQuery, SaleReader, SaleWriter};

impl SaleReader for DieselRepository {
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<(usize, Vec<Sale>)> {
        use crate::models::sale::Sale as DbSale;
        use crate::schema::sales;

        let mut conn = self.conn()?;

        let build = |query: &SaleListQuery| {
            let mut items = sales::table.into_boxed();
            if let Some(dealer_id) = query.dealer_id {
                items = items.filter(sales::dealer_id.eq(dealer_id));
            }
            if let Some(msisdn) = &query.msisdn {
                items = items.filter(sales::msisdn.eq(msisdn.clone()));
            }
            if let Some(from) = query.date_from {
                items = items.filter(sales::sold_at.ge(from.and_time(NaiveTime::MIN)));
            }
            if let Some(to) = query.date_to {
                let end = to.succ_opt().unwrap_or(to).and_time(NaiveTime::MIN);
                items = items.filter(sales::sold_at.lt(end));
            }
            items
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items = build(&query).order(sales::sold_at.desc());
        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items = items.limit(limit).offset(offset);
        }

        let items = items
            .load::<DbSale>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Sale>>();

        Ok((total as usize, items))
    }
}

impl SaleWriter for DieselRepository {
    fn create_sale(&self, new_sale: &NewSale) -> RepositoryResult<Sale> {
        use crate::models::sale::{NewSale as DbNewSale, Sale as DbSale};
        use crate::schema::sales;

        let mut conn = self.conn()?;
        let insertable: DbNewSale = new_sale.into();
        let created = diesel::insert_into(sales::table)
            .values(&insertable)
            .get_result::<DbSale>(&mut conn)?;

        Ok(created.into())
    }
}
