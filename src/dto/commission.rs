use serde::Deserialize;

use crate::domain::commission::{CommissionEarning, CommissionRate};
use crate::pagination::Paginated;

/// Query parameters accepted by the commissions page.
#[derive(Debug, Default, Deserialize)]
pub struct CommissionQuery {
    pub dealer: Option<i32>,
    /// Monthly period key, `YYYY-MM`.
    pub period: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the commission rates and earnings tables.
pub struct CommissionsPageData {
    pub rates: Vec<CommissionRate>,
    pub earnings: Paginated<CommissionEarning>,
    pub period: Option<String>,
}
