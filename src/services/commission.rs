use log::error;
use validator::Validate;

use crate::domain::commission::{CommissionEarning, CommissionRate, EarningStatus};
use crate::domain::report::DEFAULT_PAGE_SIZE;
use crate::dto::commission::{CommissionQuery, CommissionsPageData};
use crate::forms::commission::{EarningStatusForm, SaveRateForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{CommissionReader, CommissionWriter, DealerReader, EarningListQuery};
use crate::routes::check_role;
use crate::services::dealer::scoped_dealer;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the commission rates and the filtered earnings table.
pub fn load_commissions_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: CommissionQuery,
) -> ServiceResult<CommissionsPageData>
where
    R: DealerReader + CommissionReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);

    let period = query
        .period
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let scoped = scoped_dealer(repo, user)?;
    let dealer_id = scoped.as_ref().map(|d| d.id).or(query.dealer);

    let mut earning_query = EarningListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(dealer_id) = dealer_id {
        earning_query = earning_query.dealer(dealer_id);
    }
    if let Some(period) = &period {
        earning_query = earning_query.period(period.clone());
    }

    let rates = repo.list_rates().map_err(ServiceError::from)?;
    let (total, earnings) = repo.list_earnings(earning_query).map_err(ServiceError::from)?;

    Ok(CommissionsPageData {
        rates,
        earnings: Paginated::from_total(earnings, page, total, DEFAULT_PAGE_SIZE),
        period,
    })
}

/// Validates and upserts a commission rate.
pub fn save_rate<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveRateForm,
) -> ServiceResult<CommissionRate>
where
    R: CommissionWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let new_rate = form.to_new_rate()?;

    repo.upsert_rate(&new_rate).map_err(|err| {
        error!("Failed to save rate: {err}");
        ServiceError::from(err)
    })
}

/// Moves an earning through its settlement states.
pub fn set_earning_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: EarningStatusForm,
) -> ServiceResult<CommissionEarning>
where
    R: CommissionWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let status = EarningStatus::from(form.status.as_str());

    repo.set_earning_status(form.id, status).map_err(|err| {
        error!("Failed to update earning status: {err}");
        ServiceError::from(err)
    })
}
