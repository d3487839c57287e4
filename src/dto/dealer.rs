use crate::domain::dealer::{Dealer, Shop};

/// Data required to render the dealer detail page.
pub struct DealerPageData {
    pub dealer: Dealer,
    pub shops: Vec<Shop>,
}
