use serde::Deserialize;

use crate::domain::sale::Sale;
use crate::pagination::Paginated;

/// Query parameters accepted by the sales report page.
#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    /// Subscriber or B-number to search for.
    pub q: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the sales report.
pub struct SalesPageData {
    pub sales: Paginated<Sale>,
    pub search_query: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
