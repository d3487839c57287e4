//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDate;
use mockall::mock;

use crate::domain::commission::{
    CommissionEarning, CommissionRate, EarningStatus, NewCommissionEarning, NewCommissionRate,
};
use crate::domain::dealer::{Dealer, NewDealer, NewShop, Shop, UpdateDealer, UpdateShop};
use crate::domain::sale::{NewSale, Sale};
use crate::domain::stock::{NewStockItem, StockItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CommissionReader, CommissionWriter, DealerListQuery, DealerReader, DealerWriter,
    EarningListQuery, SaleListQuery, SaleReader, SaleWriter, StockListQuery, StockReader,
    StockWriter,
};

mock! {
    pub Repository {}

    impl DealerReader for Repository {
        fn get_dealer_by_id(&self, id: i32) -> RepositoryResult<Option<Dealer>>;
        fn get_dealer_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>>;
        fn list_dealers(&self, query: DealerListQuery) -> RepositoryResult<(usize, Vec<Dealer>)>;
        fn get_shop_by_id(&self, id: i32) -> RepositoryResult<Option<Shop>>;
        fn list_shops(&self, dealer_id: i32) -> RepositoryResult<Vec<Shop>>;
    }

    impl DealerWriter for Repository {
        fn create_dealer(&self, new_dealer: &NewDealer) -> RepositoryResult<Dealer>;
        fn update_dealer(&self, dealer_id: i32, updates: &UpdateDealer) -> RepositoryResult<Dealer>;
        fn deactivate_dealer(&self, dealer_id: i32) -> RepositoryResult<()>;
        fn create_shop(&self, new_shop: &NewShop) -> RepositoryResult<Shop>;
        fn update_shop(&self, shop_id: i32, updates: &UpdateShop) -> RepositoryResult<Shop>;
    }

    impl StockReader for Repository {
        fn get_stock_by_imei(&self, imei: &str) -> RepositoryResult<Option<StockItem>>;
        fn list_stock(&self, query: StockListQuery) -> RepositoryResult<(usize, Vec<StockItem>)>;
    }

    impl StockWriter for Repository {
        fn create_stock_items(&self, new_items: &[NewStockItem]) -> RepositoryResult<usize>;
        fn transfer_stock(&self, shop_id: i32, item_ids: &[i32]) -> RepositoryResult<usize>;
        fn mark_stock_sold(&self, item_id: i32) -> RepositoryResult<StockItem>;
        fn swap_stock(
            &self,
            old_imei: &str,
            new_imei: &str,
        ) -> RepositoryResult<(StockItem, StockItem)>;
    }

    impl SaleReader for Repository {
        fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<(usize, Vec<Sale>)>;
    }

    impl SaleWriter for Repository {
        fn create_sale(&self, new_sale: &NewSale) -> RepositoryResult<Sale>;
    }

    impl CommissionReader for Repository {
        fn list_rates(&self) -> RepositoryResult<Vec<CommissionRate>>;
        fn effective_rate(
            &self,
            product: &str,
            on: NaiveDate,
        ) -> RepositoryResult<Option<CommissionRate>>;
        fn list_earnings(
            &self,
            query: EarningListQuery,
        ) -> RepositoryResult<(usize, Vec<CommissionEarning>)>;
    }

    impl CommissionWriter for Repository {
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
}
