use serde::Deserialize;

use crate::domain::dealer::Shop;
use crate::domain::stock::StockItem;
use crate::pagination::Paginated;

/// Query parameters accepted by the stock page.
#[derive(Debug, Default, Deserialize)]
pub struct StockQuery {
    /// IMEI fragment to search for.
    pub q: Option<String>,
    pub status: Option<String>,
    pub shop: Option<i32>,
    /// Dealer scope for staff users; dealer accounts are scoped implicitly.
    pub dealer: Option<i32>,
    pub page: Option<usize>,
}

/// Data required to render the stock table and its transfer controls.
pub struct StockPageData {
    pub items: Paginated<StockItem>,
    /// Shops of the scoped dealer, for the filter and transfer dropdowns.
    pub shops: Vec<Shop>,
    pub search_query: Option<String>,
}
