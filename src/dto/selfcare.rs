use serde::Deserialize;

use crate::gateway::types::{Activation, BalanceInfo};
use crate::pagination::Paginated;

/// Query parameters accepted by the activations report page.
#[derive(Debug, Default, Deserialize)]
pub struct ActivationsQuery {
    /// Subscriber or B-number to search for.
    pub q: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the activations report.
pub struct ActivationsPageData {
    pub activations: Paginated<Activation>,
    pub search_query: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Data required to render the self-service page after a balance check.
pub struct BalancePageData {
    pub balance: Option<BalanceInfo>,
}
