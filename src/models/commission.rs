use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::commission::{
    CommissionEarning as DomainCommissionEarning, CommissionRate as DomainCommissionRate,
    NewCommissionEarning as DomainNewCommissionEarning,
    NewCommissionRate as DomainNewCommissionRate,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::commission_rates)]
/// Diesel model for [`crate::domain::commission::CommissionRate`].
pub struct CommissionRate {
    pub id: i32,
    pub product: String,
    pub rate_bps: i32,
    pub effective_from: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::commission_rates)]
pub struct NewCommissionRate<'a> {
    pub product: &'a str,
    pub rate_bps: i32,
    pub effective_from: NaiveDate,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::commission_earnings)]
/// Diesel model for [`crate::domain::commission::CommissionEarning`].
pub struct CommissionEarning {
    pub id: i32,
    pub dealer_id: i32,
    pub sale_id: i32,
    pub period: String,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::commission_earnings)]
/// Insertable form of [`CommissionEarning`]; status defaults to `Pending`.
pub struct NewCommissionEarning<'a> {
    pub dealer_id: i32,
    pub sale_id: i32,
    pub period: &'a str,
    pub amount_cents: i64,
}

impl From<CommissionRate> for DomainCommissionRate {
    fn from(rate: CommissionRate) -> Self {
        Self {
            id: rate.id,
            product: rate.product,
            rate_bps: rate.rate_bps,
            effective_from: rate.effective_from,
            created_at: rate.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCommissionRate> for NewCommissionRate<'a> {
    fn from(rate: &'a DomainNewCommissionRate) -> Self {
        Self {
            product: rate.product.as_str(),
            rate_bps: rate.rate_bps,
            effective_from: rate.effective_from,
        }
    }
}

impl From<CommissionEarning> for DomainCommissionEarning {
    fn from(earning: CommissionEarning) -> Self {
        Self {
            id: earning.id,
            dealer_id: earning.dealer_id,
            sale_id: earning.sale_id,
            period: earning.period,
            amount_cents: earning.amount_cents,
            status: earning.status.into(),
            created_at: earning.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCommissionEarning> for NewCommissionEarning<'a> {
    fn from(earning: &'a DomainNewCommissionEarning) -> Self {
        Self {
            dealer_id: earning.dealer_id,
            sale_id: earning.sale_id,
            period: earning.period.as_str(),
            amount_cents: earning.amount_cents,
        }
    }
}
