use log::{error, warn};
use validator::Validate;

use crate::domain::types::Msisdn;
use crate::dto::selfcare::{ActivationsPageData, ActivationsQuery, BalancePageData};
use crate::forms::selfcare::{ActivationForm, BalanceQuery, BundleForm};
use crate::gateway::types::{Activation, GatewayAck};
use crate::gateway::{GatewayClient, ReportSession};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::DealerReader;
use crate::routes::check_role;
use crate::services::dealer::scoped_dealer;
use crate::services::sale::filter_from_query;
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ACCESS_ROLE;

/// Report endpoint on the provisioning gateway.
const ACTIVATIONS_PATH: &str = "activations";

/// Looks up the airtime balance for a subscriber.
pub async fn check_balance(
    client: &GatewayClient,
    user: &AuthenticatedUser,
    query: BalanceQuery,
) -> ServiceResult<BalancePageData> {
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let Some(raw) = query.msisdn.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(BalancePageData { balance: None });
    };

    let msisdn = Msisdn::new(raw)
        .map_err(|_| ServiceError::Form("Invalid subscriber number".to_string()))?;

    let balance = client.balance(&msisdn).await?;

    Ok(BalancePageData {
        balance: Some(balance),
    })
}

/// Purchases a bundle on behalf of a subscriber.
pub async fn purchase_bundle(
    client: &GatewayClient,
    user: &AuthenticatedUser,
    form: BundleForm,
) -> ServiceResult<GatewayAck> {
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let purchase = form.to_purchase()?;

    client.purchase_bundle(&purchase).await.map_err(|err| {
        error!("Bundle purchase failed: {err}");
        ServiceError::from(err)
    })
}

/// Submits a SIM activation under the acting dealer's code.
pub async fn submit_activation<R>(
    repo: &R,
    client: &GatewayClient,
    user: &AuthenticatedUser,
    form: ActivationForm,
) -> ServiceResult<GatewayAck>
where
    R: DealerReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Form validation failed".to_string()));
    }

    let dealer = scoped_dealer(repo, user)?.ok_or_else(|| {
        ServiceError::Form("Activations are submitted from a dealer account".to_string())
    })?;

    let request = form.to_request(dealer.code)?;

    client.submit_activation(&request).await.map_err(|err| {
        error!("Activation submission failed: {err}");
        ServiceError::from(err)
    })
}

/// Loads one page of the upstream activations report.
///
/// A failed refresh falls back to the last page this session accepted, so
/// transient gateway trouble does not blank the screen.
pub async fn load_activations_page(
    client: &GatewayClient,
    session: &ReportSession<Activation>,
    user: &AuthenticatedUser,
    query: ActivationsQuery,
) -> ServiceResult<ActivationsPageData> {
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut filter = filter_from_query(
        query.q.as_deref(),
        query.from.as_deref(),
        query.to.as_deref(),
        query.page,
    );

    let page = match session.refresh(client, ACTIVATIONS_PATH, &filter).await {
        Ok(page) => page,
        Err(err) => {
            let fallback = session.snapshot();
            if fallback.is_none() {
                return Err(ServiceError::from(err));
            }
            warn!("Activations refresh failed, serving last good page: {err}");
            fallback
        }
    };

    let (rows, total) = match page {
        Some(page) => (page.rows, page.total_count),
        None => (Vec::new(), 0),
    };
    filter.record_total(total);

    let search_query = Some(filter.applied_search_text().to_string())
        .filter(|s| !s.is_empty());

    Ok(ActivationsPageData {
        activations: Paginated::from_total(rows, filter.current_page(), total, filter.page_size()),
        search_query,
        date_from: filter.date_from().map(|d| d.format("%Y-%m-%d").to_string()),
        date_to: filter.date_to().map(|d| d.format("%Y-%m-%d").to_string()),
    })
}
