use dealerdesk::domain::commission::{EarningStatus, NewCommissionRate};
use dealerdesk::domain::dealer::{NewDealer, NewShop, UpdateDealer};
use dealerdesk::domain::sale::NewSale;
use dealerdesk::domain::stock::{NewStockItem, StockStatus};
use dealerdesk::domain::types::{Imei, Msisdn};
use dealerdesk::repository::{
    CommissionReader, CommissionWriter, DealerListQuery, DealerReader, DealerWriter,
    DieselRepository, EarningListQuery, SaleListQuery, SaleReader, SaleWriter, StockListQuery,
    StockReader, StockWriter,
};
use chrono::NaiveDate;

mod common;

fn new_dealer(code: &str, email: &str) -> NewDealer {
    NewDealer::new(
        code.to_string(),
        format!("Dealer {code}"),
        email.to_string(),
        Msisdn::new("0771234567").unwrap(),
        "Central".to_string(),
    )
}

#[test]
fn test_dealer_repository_crud() {
    let test_db = common::TestDb::new("test_dealer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = repo.create_dealer(&new_dealer("KLA-01", "alice@example.com")).unwrap();
    let bob = repo.create_dealer(&new_dealer("MBL-02", "bob@example.com")).unwrap();

    let (total, items) = repo.list_dealers(DealerListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let (search_total, search_items) = repo
        .list_dealers(DealerListQuery::new().search("MBL"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].code, "MBL-02");

    let by_email = repo.get_dealer_by_email("Alice@Example.com").unwrap().unwrap();
    assert_eq!(by_email.id, alice.id);

    let updates = UpdateDealer::new(
        "Bobby Telecom".to_string(),
        "bob@example.com".to_string(),
        Msisdn::new("0772000000").unwrap(),
        "Western".to_string(),
        true,
    );
    let updated = repo.update_dealer(bob.id, &updates).unwrap();
    assert_eq!(updated.name, "Bobby Telecom");
    assert_eq!(updated.msisdn, "256772000000");

    repo.deactivate_dealer(alice.id).unwrap();
    let (active_total, _) = repo.list_dealers(DealerListQuery::new()).unwrap();
    assert_eq!(active_total, 1);
    let (all_total, _) = repo
        .list_dealers(DealerListQuery::new().include_inactive())
        .unwrap();
    assert_eq!(all_total, 2);

    let (paged_total, paged) = repo
        .list_dealers(DealerListQuery::new().include_inactive().paginate(2, 1))
        .unwrap();
    assert_eq!(paged_total, 2);
    assert_eq!(paged.len(), 1);
}

#[test]
fn test_shop_repository_crud() {
    let test_db = common::TestDb::new("test_shop_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let dealer = repo.create_dealer(&new_dealer("KLA-01", "alice@example.com")).unwrap();

    let shop = repo
        .create_shop(&NewShop::new(
            dealer.id,
            "Main Street".to_string(),
            "Kampala".to_string(),
            Msisdn::new("0772111111").unwrap(),
        ))
        .unwrap();
    assert_eq!(shop.dealer_id, dealer.id);

    let shops = repo.list_shops(dealer.id).unwrap();
    assert_eq!(shops.len(), 1);
    assert_eq!(repo.get_shop_by_id(shop.id).unwrap().unwrap().name, "Main Street");
}

#[test]
fn test_stock_repository_flows() {
    let test_db = common::TestDb::new("test_stock_repository_flows.db");
    let repo = DieselRepository::new(test_db.pool());

    let dealer = repo.create_dealer(&new_dealer("KLA-01", "alice@example.com")).unwrap();
    let shop = repo
        .create_shop(&NewShop::new(
            dealer.id,
            "Main Street".to_string(),
            "Kampala".to_string(),
            Msisdn::new("0772111111").unwrap(),
        ))
        .unwrap();

    let items = vec![
        NewStockItem::new(
            Imei::new("356091804123452").unwrap(),
            "starter-pack".to_string(),
            dealer.id,
            None,
        ),
        NewStockItem::new(
            Imei::new("356091804123460").unwrap(),
            "starter-pack".to_string(),
            dealer.id,
            None,
        ),
    ];
    assert_eq!(repo.create_stock_items(&items).unwrap(), 2);
    // Re-uploading the same consignment is a no-op.
    assert_eq!(repo.create_stock_items(&items).unwrap(), 0);

    let (total, stock) = repo
        .list_stock(StockListQuery::new().dealer(dealer.id))
        .unwrap();
    assert_eq!(total, 2);
    assert!(stock.iter().all(|i| i.status == StockStatus::InStock));

    let ids: Vec<i32> = stock.iter().map(|i| i.id).collect();
    assert_eq!(repo.transfer_stock(shop.id, &ids).unwrap(), 2);

    let (_, assigned) = repo
        .list_stock(StockListQuery::new().shop(shop.id))
        .unwrap();
    assert_eq!(assigned.len(), 2);
    assert!(assigned.iter().all(|i| i.status == StockStatus::Assigned));

    let sold = repo.mark_stock_sold(assigned[0].id).unwrap();
    assert_eq!(sold.status, StockStatus::Sold);

    // Swap rejects a replacement that is not in the warehouse.
    assert!(repo.swap_stock(&sold.imei, &assigned[1].imei).is_err());

    let replacement = NewStockItem::new(
        Imei::new("356091804123478").unwrap(),
        "starter-pack".to_string(),
        dealer.id,
        None,
    );
    repo.create_stock_items(&[replacement]).unwrap();

    let (old, swapped_in) = repo.swap_stock(&sold.imei, "356091804123478").unwrap();
    assert_eq!(old.status, StockStatus::Swapped);
    assert_eq!(swapped_in.status, StockStatus::Sold);
    assert_eq!(swapped_in.shop_id, Some(shop.id));

    let (filtered_total, filtered) = repo
        .list_stock(StockListQuery::new().imei("12347"))
        .unwrap();
    assert_eq!(filtered_total, 1);
    assert_eq!(filtered[0].imei, "356091804123478");
}

#[test]
fn test_sale_and_commission_repository() {
    let test_db = common::TestDb::new("test_sale_and_commission_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let dealer = repo.create_dealer(&new_dealer("KLA-01", "alice@example.com")).unwrap();
    let shop = repo
        .create_shop(&NewShop::new(
            dealer.id,
            "Main Street".to_string(),
            "Kampala".to_string(),
            Msisdn::new("0772111111").unwrap(),
        ))
        .unwrap();

    let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let jul = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

    repo.upsert_rate(&NewCommissionRate::new("starter-pack".to_string(), 200, jan))
        .unwrap();
    repo.upsert_rate(&NewCommissionRate::new("starter-pack".to_string(), 250, jul))
        .unwrap();
    // Same (product, effective_from) replaces the rate instead of duplicating.
    repo.upsert_rate(&NewCommissionRate::new("starter-pack".to_string(), 300, jul))
        .unwrap();
    assert_eq!(repo.list_rates().unwrap().len(), 2);

    let march = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let august = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    assert_eq!(
        repo.effective_rate("starter-pack", march).unwrap().unwrap().rate_bps,
        200
    );
    assert_eq!(
        repo.effective_rate("starter-pack", august).unwrap().unwrap().rate_bps,
        300
    );
    assert!(repo.effective_rate("unknown", august).unwrap().is_none());

    let sale = repo
        .create_sale(&NewSale::new(
            dealer.id,
            shop.id,
            Msisdn::new("0771234567").unwrap(),
            "starter-pack".to_string(),
            50_000,
            august.and_hms_opt(10, 30, 0).unwrap(),
        ))
        .unwrap();
    assert_eq!(sale.msisdn, "256771234567");

    let (total, sales) = repo
        .list_sales(SaleListQuery::new().msisdn("256771234567"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(sales[0].id, sale.id);

    let (in_range, _) = repo
        .list_sales(SaleListQuery::new().date_range(Some(jul), Some(august)))
        .unwrap();
    assert_eq!(in_range, 1);
    let (out_of_range, _) = repo
        .list_sales(SaleListQuery::new().date_range(Some(jan), Some(march)))
        .unwrap();
    assert_eq!(out_of_range, 0);

    let earning = repo
        .create_earning(&dealerdesk::domain::commission::NewCommissionEarning {
            dealer_id: dealer.id,
            sale_id: sale.id,
            period: "2026-08".to_string(),
            amount_cents: 1_500,
        })
        .unwrap();
    assert_eq!(earning.status, EarningStatus::Pending);

    let (earning_total, earnings) = repo
        .list_earnings(EarningListQuery::new().dealer(dealer.id).period("2026-08"))
        .unwrap();
    assert_eq!(earning_total, 1);
    assert_eq!(earnings[0].id, earning.id);

    let paid = repo
        .set_earning_status(earning.id, EarningStatus::Paid)
        .unwrap();
    assert_eq!(paid.status, EarningStatus::Paid);
}
