use log::error;
use validator::Validate;

use crate::domain::dealer::Dealer;
use crate::dto::dealer::DealerPageData;
use crate::forms::dealer::{AddDealerForm, AddShopForm, SaveDealerForm, SaveShopForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DealerReader, DealerWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE, SERVICE_DEALER_ROLE};

/// Dealer the user is restricted to, if their account carries the
/// dealer-scoped role. Staff accounts are unrestricted (`None`).
pub(crate) fn scoped_dealer<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Option<Dealer>>
where
    R: DealerReader + ?Sized,
{
    if !check_role(SERVICE_DEALER_ROLE, &user.roles) {
        return Ok(None);
    }
    match repo.get_dealer_by_email(&user.email).map_err(ServiceError::from)? {
        Some(dealer) => Ok(Some(dealer)),
        None => Err(ServiceError::Unauthorized),
    }
}

/// Loads the dealer detail page with its shops.
pub fn load_dealer_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    dealer_id: i32,
) -> ServiceResult<DealerPageData>
where
    R: DealerReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != dealer_id
    {
        return Err(ServiceError::Unauthorized);
    }

    let dealer = repo
        .get_dealer_by_id(dealer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let shops = repo.list_shops(dealer.id).map_err(ServiceError::from)?;

    Ok(DealerPageData { dealer, shops })
}

/// Validates the add-dealer form and persists a new dealer record.
pub fn add_dealer<R>(repo: &R, user: &AuthenticatedUser, form: AddDealerForm) -> ServiceResult<()>
where
    R: DealerWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let new_dealer = form.to_new_dealer()?;

    repo.create_dealer(&new_dealer).map_err(|err| {
        error!("Failed to add a dealer: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Applies the provided updates to the dealer entity.
pub fn save_dealer<R>(repo: &R, user: &AuthenticatedUser, form: SaveDealerForm) -> ServiceResult<()>
where
    R: DealerReader + DealerWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != form.id
    {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let updates = form.to_update_dealer()?;

    repo.update_dealer(form.id, &updates).map_err(|err| {
        error!("Failed to update dealer: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Marks a dealer inactive; records and history stay in place.
pub fn deactivate_dealer<R>(repo: &R, user: &AuthenticatedUser, dealer_id: i32) -> ServiceResult<()>
where
    R: DealerWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.deactivate_dealer(dealer_id).map_err(ServiceError::from)
}

/// Validates the add-shop form and persists a new shop under the dealer.
pub fn add_shop<R>(repo: &R, user: &AuthenticatedUser, form: AddShopForm) -> ServiceResult<()>
where
    R: DealerReader + DealerWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != form.dealer_id
    {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let new_shop = form.to_new_shop()?;

    repo.create_shop(&new_shop).map_err(|err| {
        error!("Failed to add a shop: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Applies the provided updates to a shop.
pub fn save_shop<R>(repo: &R, user: &AuthenticatedUser, form: SaveShopForm) -> ServiceResult<()>
where
    R: DealerReader + DealerWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let shop = repo
        .get_shop_by_id(form.id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if let Some(scoped) = scoped_dealer(repo, user)?
        && scoped.id != shop.dealer_id
    {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let updates = form.to_update_shop()?;

    repo.update_shop(form.id, &updates).map_err(|err| {
        error!("Failed to update shop: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}
