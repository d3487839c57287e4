use crate::domain::report::DEFAULT_PAGE_SIZE;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{DealerListQuery, DealerReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_DEALER_ROLE};

/// Loads the dealer list for the main index page.
///
/// Staff see every active dealer; dealer accounts only see their own record.
pub fn load_index_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: IndexQuery,
) -> ServiceResult<IndexPageData>
where
    R: DealerReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);

    let search_query = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let (total, dealers) = if check_role(SERVICE_DEALER_ROLE, &user.roles) {
        match repo.get_dealer_by_email(&user.email).map_err(ServiceError::from)? {
            Some(dealer) => (1, vec![dealer]),
            None => (0, Vec::new()),
        }
    } else {
        let mut list_query = DealerListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
        if let Some(term) = &search_query {
            list_query = list_query.search(term.clone());
        }
        repo.list_dealers(list_query).map_err(ServiceError::from)?
    };

    let dealers = Paginated::from_total(dealers, page, total, DEFAULT_PAGE_SIZE);

    Ok(IndexPageData {
        dealers,
        search_query,
    })
}
