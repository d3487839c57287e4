use chrono::Utc;
use log::error;
use validator::Validate;

use crate::domain::report::{ReportFilter, SearchTerm, parse_report_date};
use crate::domain::sale::{NewSale, Sale};
use crate::domain::types::{Msisdn, Period};
use crate::dto::sale::{SalesPageData, SalesQuery};
use crate::forms::sale::RecordSaleForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::domain::commission::NewCommissionEarning;
use crate::repository::{
    CommissionReader, CommissionWriter, DealerReader, SaleListQuery, SaleReader, SaleWriter,
    StockWriter,
};
use crate::routes::check_role;
use crate::services::dealer::scoped_dealer;
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ACCESS_ROLE;

/// Builds the committed report filter for a sales/activations style query.
pub(crate) fn filter_from_query(
    q: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    page: Option<usize>,
) -> ReportFilter {
    let mut filter = ReportFilter::default();
    if let Some(q) = q {
        filter.set_search_text(q);
        filter.apply_search();
    }
    filter.set_date_from(from.and_then(|v| parse_report_date(v)));
    filter.set_date_to(to.and_then(|v| parse_report_date(v)));
    filter.set_page(page.unwrap_or(1));
    filter
}

/// Maps the committed filter onto a repository query. B-numbers are
/// normalized to the international form the sales table stores.
pub(crate) fn sales_query_from(filter: &ReportFilter) -> SaleListQuery {
    let mut query = SaleListQuery::new()
        .date_range(filter.date_from(), filter.date_to())
        .paginate(filter.current_page(), filter.page_size());

    match SearchTerm::classify(filter.applied_search_text()) {
        SearchTerm::Msisdn(value) => {
            query = query.msisdn(value);
        }
        SearchTerm::Bnumber(value) => {
            if let Ok(msisdn) = Msisdn::new(value) {
                query = query.msisdn(msisdn.into_inner());
            }
        }
        SearchTerm::Unclassified => {}
    }

    query
}

/// Loads the sales report for the committed filter state.
pub fn load_sales_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: SalesQuery,
) -> ServiceResult<SalesPageData>
where
    R: DealerReader + SaleReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut filter = filter_from_query(
        query.q.as_deref(),
        query.from.as_deref(),
        query.to.as_deref(),
        query.page,
    );

    let mut list_query = sales_query_from(&filter);
    if let Some(scoped) = scoped_dealer(repo, user)? {
        list_query = list_query.dealer(scoped.id);
    }

    let (total, sales) = repo.list_sales(list_query).map_err(ServiceError::from)?;
    filter.record_total(total);

    let search_query = Some(filter.applied_search_text().to_string())
        .filter(|s| !s.is_empty());

    Ok(SalesPageData {
        sales: Paginated::from_total(sales, filter.current_page(), total, filter.page_size()),
        search_query,
        date_from: filter.date_from().map(|d| d.format("%Y-%m-%d").to_string()),
        date_to: filter.date_to().map(|d| d.format("%Y-%m-%d").to_string()),
    })
}

/// Records a shop sale, moves the handset out of stock when one is attached
/// and books the commission at the rate effective on the sale date.
pub fn record_sale<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RecordSaleForm,
) -> ServiceResult<Sale>
where
    R: DealerReader + SaleWriter + StockWriter + CommissionReader + CommissionWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let shop = repo
        .get_shop_by_id(form.shop_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != shop.dealer_id
    {
        return Err(ServiceError::Unauthorized);
    }

    let msisdn = form.msisdn()?;
    let sold_at = Utc::now().naive_utc();

    let new_sale = NewSale::new(
        shop.dealer_id,
        shop.id,
        msisdn,
        form.product.clone(),
        form.amount_cents,
        sold_at,
    );

    let sale = repo.create_sale(&new_sale).map_err(|err| {
        error!("Failed to record sale: {err}");
        ServiceError::from(err)
    })?;

    if let Some(item_id) = form.stock_item_id {
        repo.mark_stock_sold(item_id).map_err(|err| {
            error!("Failed to mark stock item sold: {err}");
            ServiceError::from(err)
        })?;
    }

    let rate = repo
        .effective_rate(&sale.product, sale.sold_at.date())
        .map_err(ServiceError::from)?;

    if let Some(rate) = rate {
        let earning = NewCommissionEarning {
            dealer_id: sale.dealer_id,
            sale_id: sale.id,
            period: Period::of(sale.sold_at.date()).into_inner(),
            amount_cents: rate.commission_for(sale.amount_cents),
        };
        repo.create_earning(&earning).map_err(|err| {
            error!("Failed to book commission: {err}");
            ServiceError::from(err)
        })?;
    }

    Ok(sale)
}
