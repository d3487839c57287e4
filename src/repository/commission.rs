use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::domain::commission::{
    CommissionEarning, CommissionRate, EarningStatus, NewCommissionEarning, NewCommissionRate,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CommissionReader, CommissionWriter, DieselRepository, EarningListQuery};

impl CommissionReader for DieselRepository {
    fn list_rates(&self) -> RepositoryResult<Vec<CommissionRate>> {
        use crate::models::commission::CommissionRate as DbCommissionRate;
        use crate::schema::commission_rates;

        let mut conn = self.conn()?;
        let rates = commission_rates::table
            .order((
                commission_rates::product.asc(),
                commission_rates::effective_from.desc(),
            ))
            .load::<DbCommissionRate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(rates)
    }

    fn effective_rate(
        &self,
        product: &str,
        on: NaiveDate,
    ) -> RepositoryResult<Option<CommissionRate>> {
        use crate::models::commission::CommissionRate as DbCommissionRate;
        use crate::schema::commission_rates;

        let mut conn = self.conn()?;
        let rate = commission_rates::table
            .filter(commission_rates::product.eq(product))
            .filter(commission_rates::effective_from.le(on))
            .order(commission_rates::effective_from.desc())
            .first::<DbCommissionRate>(&mut conn)
            .optional()?;

        Ok(rate.map(Into::into))
    }

    fn list_earnings(
        &self,
        query: EarningListQuery,
    ) -> RepositoryResult<(usize, Vec<CommissionEarning>)> {
        use crate::models::commission::CommissionEarning as DbCommissionEarning;
        use crate::schema::commission_earnings;

        let mut conn = self.conn()?;

        let build = |query: &EarningListQuery| {
            let mut items = commission_earnings::table.into_boxed();
            if let Some(dealer_id) = query.dealer_id {
                items = items.filter(commission_earnings::dealer_id.eq(dealer_id));
            }
            if let Some(period) = &query.period {
                items = items.filter(commission_earnings::period.eq(period.clone()));
            }
            items
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items = build(&query).order(commission_earnings::id.desc());
        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items = items.limit(limit).offset(offset);
        }

        let items = items
            .load::<DbCommissionEarning>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<CommissionEarning>>();

        Ok((total as usize, items))
    }
}

impl CommissionWriter for DieselRepository {
    fn upsert_rate(&self, new_rate: &NewCommissionRate) -> RepositoryResult<CommissionRate> {
        use crate::models::commission::{
            CommissionRate as DbCommissionRate, NewCommissionRate as DbNewCommissionRate,
        };
        use crate::schema::commission_rates;

        let mut conn = self.conn()?;
        let insertable: DbNewCommissionRate = new_rate.into();
        let upserted = diesel::insert_into(commission_rates::table)
            .values(&insertable)
            .on_conflict((
                commission_rates::product,
                commission_rates::effective_from,
            ))
            .do_update()
            .set(commission_rates::rate_bps.eq(excluded(commission_rates::rate_bps)))
            .get_result::<DbCommissionRate>(&mut conn)?;

        Ok(upserted.into())
    }

    fn create_earning(
        &self,
        new_earning: &NewCommissionEarning,
    ) -> RepositoryResult<CommissionEarning> {
        use crate::models::commission::{
            CommissionEarning as DbCommissionEarning,
            NewCommissionEarning as DbNewCommissionEarning,
        };
        use crate::schema::commission_earnings;

        let mut conn = self.conn()?;
        let insertable: DbNewCommissionEarning = new_earning.into();
        let created = diesel::insert_into(commission_earnings::table)
            .values(&insertable)
            .get_result::<DbCommissionEarning>(&mut conn)?;

        Ok(created.into())
    }

    fn set_earning_status(
        &self,
        earning_id: i32,
        status: EarningStatus,
    ) -> RepositoryResult<CommissionEarning> {
        use crate::models::commission::CommissionEarning as DbCommissionEarning;
        use crate::schema::commission_earnings;

        let mut conn = self.conn()?;
        let updated = diesel::update(commission_earnings::table.find(earning_id))
            .set(commission_earnings::status.eq(status.to_string()))
            .get_result::<DbCommissionEarning>(&mut conn)?;

        Ok(updated.into())
    }
}
