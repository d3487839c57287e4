use crate::domain::sale::Sale;
use crate::dto::api::ReportResponse;
use crate::dto::sale::SalesQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DealerReader, SaleReader};
use crate::routes::check_role;
use crate::services::dealer::scoped_dealer;
use crate::services::sale::{filter_from_query, sales_query_from};
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ACCESS_ROLE;

/// Returns one page of sales in the same envelope the gateway speaks.
pub fn list_sales<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: SalesQuery,
) -> ServiceResult<ReportResponse<Sale>>
where
    R: DealerReader + SaleReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filter = filter_from_query(
        params.q.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
        params.page,
    );

    let mut query = sales_query_from(&filter);
    if let Some(scoped) = scoped_dealer(repo, user)? {
        query = query.dealer(scoped.id);
    }

    let (total, sales) = repo.list_sales(query).map_err(ServiceError::from)?;

    Ok(ReportResponse::new(total, sales))
}
