use serde::Deserialize;

use crate::domain::dealer::Dealer;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Paginated list of dealers to show in the table.
    pub dealers: Paginated<Dealer>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
