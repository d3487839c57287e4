use log::error;
use validator::Validate;

use crate::domain::report::DEFAULT_PAGE_SIZE;
use crate::domain::stock::{StockItem, StockStatus};
use crate::dto::stock::{StockPageData, StockQuery};
use crate::forms::stock::{SwapImeiForm, TransferStockForm, UploadStockForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{DealerReader, StockListQuery, StockReader, StockWriter};
use crate::routes::check_role;
use crate::services::dealer::scoped_dealer;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the stock table with its shop filter and transfer dropdowns.
pub fn load_stock_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: StockQuery,
) -> ServiceResult<StockPageData>
where
    R: DealerReader + StockReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);

    let search_query = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let scoped = scoped_dealer(repo, user)?;
    let dealer_id = scoped.as_ref().map(|d| d.id).or(query.dealer);

    let mut list_query = StockListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(dealer_id) = dealer_id {
        list_query = list_query.dealer(dealer_id);
    }
    if let Some(shop_id) = query.shop {
        list_query = list_query.shop(shop_id);
    }
    if let Some(status) = query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        list_query = list_query.status(StockStatus::from(status));
    }
    if let Some(term) = &search_query {
        list_query = list_query.imei(term.clone());
    }

    let (total, items) = repo.list_stock(list_query).map_err(ServiceError::from)?;

    let shops = match dealer_id {
        Some(dealer_id) => repo.list_shops(dealer_id).map_err(ServiceError::from)?,
        None => Vec::new(),
    };

    Ok(StockPageData {
        items: Paginated::from_total(items, page, total, DEFAULT_PAGE_SIZE),
        shops,
        search_query,
    })
}

/// Parses the uploaded CSV and registers the consignment.
pub fn upload_stock<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &mut UploadStockForm,
) -> ServiceResult<usize>
where
    R: DealerReader + StockWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != form.dealer_id.0
    {
        return Err(ServiceError::Unauthorized);
    }

    let items = form.parse().map_err(|err| {
        error!("Failed to parse stock csv: {err}");
        ServiceError::Form(format!("Stock file rejected: {err}"))
    })?;

    repo.create_stock_items(&items).map_err(|err| {
        error!("Failed to add stock items: {err}");
        ServiceError::from(err)
    })
}

/// Moves the selected items into the target shop.
pub fn transfer_stock<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: TransferStockForm,
) -> ServiceResult<usize>
where
    R: DealerReader + StockWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
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

    if form.item_ids.is_empty() {
        return Err(ServiceError::Form("No stock items selected".to_string()));
    }

    repo.transfer_stock(shop.id, &form.item_ids)
        .map_err(ServiceError::from)
}

/// Swaps a sold handset for a replacement from stock.
pub fn swap_imei<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SwapImeiForm,
) -> ServiceResult<(StockItem, StockItem)>
where
    R: DealerReader + StockReader + StockWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let (old_imei, new_imei) = form.imeis()?;

    if let Some(scoped) = scoped_dealer(repo, user)? {
        let owned = repo
            .get_stock_by_imei(old_imei.as_str())
            .map_err(ServiceError::from)?
            .is_some_and(|item| item.dealer_id == scoped.id);
        if !owned {
            return Err(ServiceError::Unauthorized);
        }
    }

    repo.swap_stock(old_imei.as_str(), new_imei.as_str())
        .map_err(|err| {
            error!("Failed to swap stock: {err}");
            ServiceError::from(err)
        })
}

/// Marks a stock item as sold outside of a recorded sale. Admin only; the
/// regular path goes through sale recording.
pub fn mark_sold<R>(repo: &R, user: &AuthenticatedUser, item_id: i32) -> ServiceResult<StockItem>
where
    R: StockWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.mark_stock_sold(item_id).map_err(ServiceError::from)
}
