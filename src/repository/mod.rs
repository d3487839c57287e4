//! Repository traits and query builders backing the service layer.
//!
//! Read/write concerns are split per aggregate so services can stay generic
//! over exactly the capabilities they use; [`DieselRepository`] implements
//! the whole set against SQLite.

use chrono::NaiveDate;

use crate::db::DbPool;
use crate::domain::commission::{
    CommissionEarning, CommissionRate, EarningStatus, NewCommissionEarning, NewCommissionRate,
};
use crate::domain::dealer::{Dealer, NewDealer, NewShop, Shop, UpdateDealer, UpdateShop};
use crate::domain::sale::{NewSale, Sale};
use crate::domain::stock::{NewStockItem, StockItem, StockStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod commission;
pub mod dealer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sale;
pub mod stock;

/// Shared Diesel repository handle; cheap to clone, one per worker.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        self.pool.get().map_err(RepositoryError::from)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub(crate) fn limit_offset(&self) -> (i64, i64) {
        let page = self.page.max(1) as i64;
        let per_page = self.per_page.max(1) as i64;
        (per_page, (page - 1) * per_page)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DealerListQuery {
    pub search: Option<String>,
    pub include_inactive: bool,
    pub pagination: Option<Pagination>,
}

impl DealerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct StockListQuery {
    pub dealer_id: Option<i32>,
    pub shop_id: Option<i32>,
    pub status: Option<StockStatus>,
    pub imei: Option<String>,
    pub pagination: Option<Pagination>,
}

impl StockListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dealer(mut self, dealer_id: i32) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }

    pub fn shop(mut self, shop_id: i32) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    pub fn status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn imei(mut self, imei: impl Into<String>) -> Self {
        self.imei = Some(imei.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaleListQuery {
    pub dealer_id: Option<i32>,
    pub msisdn: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

impl SaleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dealer(mut self, dealer_id: i32) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }

    pub fn msisdn(mut self, msisdn: impl Into<String>) -> Self {
        self.msisdn = Some(msisdn.into());
        self
    }

    pub fn date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EarningListQuery {
    pub dealer_id: Option<i32>,
    pub period: Option<String>,
    pub pagination: Option<Pagination>,
}

impl EarningListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dealer(mut self, dealer_id: i32) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait DealerReader {
    fn get_dealer_by_id(&self, id: i32) -> RepositoryResult<Option<Dealer>>;
    fn get_dealer_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>>;
    fn list_dealers(&self, query: DealerListQuery) -> RepositoryResult<(usize, Vec<Dealer>)>;
    fn get_shop_by_id(&self, id: i32) -> RepositoryResult<Option<Shop>>;
    fn list_shops(&self, dealer_id: i32) -> RepositoryResult<Vec<Shop>>;
}

pub trait DealerWriter {
    fn create_dealer(&self, new_dealer: &NewDealer) -> RepositoryResult<Dealer>;
    fn update_dealer(&self, dealer_id: i32, updates: &UpdateDealer) -> RepositoryResult<Dealer>;
    fn deactivate_dealer(&self, dealer_id: i32) -> RepositoryResult<()>;
    fn create_shop(&self, new_shop: &NewShop) -> RepositoryResult<Shop>;
    fn update_shop(&self, shop_id: i32, updates: &UpdateShop) -> RepositoryResult<Shop>;
}

pub trait StockReader {
    fn get_stock_by_imei(&self, imei: &str) -> RepositoryResult<Option<StockItem>>;
    fn list_stock(&self, query: StockListQuery) -> RepositoryResult<(usize, Vec<StockItem>)>;
}

pub trait StockWriter {
    /// Inserts a batch, skipping IMEIs already present; returns rows added.
    fn create_stock_items(&self, new_items: &[NewStockItem]) -> RepositoryResult<usize>;
    /// Moves the given items to a shop and marks them `Assigned`.
    fn transfer_stock(&self, shop_id: i32, item_ids: &[i32]) -> RepositoryResult<usize>;
    fn mark_stock_sold(&self, item_id: i32) -> RepositoryResult<StockItem>;
    /// Atomically retires a sold handset and assigns its replacement.
    fn swap_stock(&self, old_imei: &str, new_imei: &str)
    -> RepositoryResult<(StockItem, StockItem)>;
}

pub trait SaleReader {
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<(usize, Vec<Sale>)>;
}

pub trait SaleWriter {
    fn create_sale(&self, new_sale: &NewSale) -> RepositoryResult<Sale>;
}

pub trait CommissionReader {
    fn list_rates(&self) -> RepositoryResult<Vec<CommissionRate>>;
    /// Latest rate for the product whose `effective_from` is not after `on`.
    fn effective_rate(&self, product: &str, on: NaiveDate)
    -> RepositoryResult<Option<CommissionRate>>;
    fn list_earnings(
        &self,
        query: EarningListQuery,
    ) -> RepositoryResult<(usize, Vec<CommissionEarning>)>;
}

pub trait CommissionWriter {
    fn upsert_rate(&self, new_rate: &NewCommissionRate) -> RepositoryResult<CommissionRate>;
    fn create_earning(
        &self,
        new_earning: &NewCommissionEarning,
    ) -> RepositoryResult<CommissionEarning>;
    fn set_earning_status(
        &self,
        earning_id: i32,
        status: EarningStatus,
    ) -> RepositoryResult<CommissionEarning>;
}
