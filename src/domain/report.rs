//! Filter state and request descriptors for searchable, paginated reports.
//!
//! Every report screen (activations, sales) keeps one [`ReportFilter`] per
//! instance. Edits to the search box are uncommitted until
//! [`ReportFilter::apply_search`] runs, so typing alone never changes the
//! derived [`QueryDescriptor`]. Dates that fail to parse are treated as
//! absent, not as errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows requested per page unless a screen overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Wire date format for the `from`/`to` report bounds.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a committed search term is sent upstream.
///
/// The reporting backend has no free-text search; a term is either a full
/// international subscriber number, a national B-number, or it is dropped.
/// Classification is checked in that order and at most one variant is ever
/// emitted per descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchTerm {
    /// 12 digits with the `256` country prefix, sent as `msisdn`.
    Msisdn(String),
    /// 10 digits in national format with a leading `0`, sent as `bnumber`.
    Bnumber(String),
    /// Anything else; omitted from the descriptor.
    Unclassified,
}

impl SearchTerm {
    pub fn classify(term: &str) -> Self {
        let digits = term.bytes().all(|b| b.is_ascii_digit());
        if digits && term.len() == 12 && term.starts_with("256") {
            SearchTerm::Msisdn(term.to_string())
        } else if digits && term.len() == 10 && term.starts_with('0') {
            SearchTerm::Bnumber(term.to_string())
        } else {
            SearchTerm::Unclassified
        }
    }
}

/// Per-screen filter state for a searchable, paginated report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportFilter {
    /// What the user has typed; not part of any request until applied.
    search_text: String,
    /// The committed term used when deriving request descriptors.
    applied_search_text: String,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    page: usize,
    page_size: usize,
    /// Server-reported total for the committed filter; `None` until the
    /// first response arrives and never locally authoritative.
    total_count: Option<usize>,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            applied_search_text: String::new(),
            date_from: None,
            date_to: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: None,
        }
    }
}

impl ReportFilter {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Updates the uncommitted search box contents. Never triggers a fetch
    /// or changes the derived descriptor by itself.
    pub fn set_search_text(&mut self, value: impl Into<String>) {
        self.search_text = value.into();
    }

    /// Commits the trimmed search text into the applied term.
    pub fn apply_search(&mut self) {
        self.applied_search_text = self.search_text.trim().to_string();
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.date_from = date;
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.date_to = date;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Records the total reported by the server for the committed filter.
    pub fn record_total(&mut self, total_count: usize) {
        self.total_count = Some(total_count);
    }

    /// Restores search text, committed search text and both date bounds to
    /// their defaults in a single state update.
    pub fn reset_filters(&mut self) {
        self.search_text = String::new();
        self.applied_search_text = String::new();
        self.date_from = None;
        self.date_to = None;
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn applied_search_text(&self) -> &str {
        &self.applied_search_text
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages derived from the last reported total; a report always has
    /// at least one page.
    pub fn total_pages(&self) -> usize {
        self.total_count
            .unwrap_or(0)
            .div_ceil(self.page_size)
            .max(1)
    }

    /// Requested page, clamped into the derived page range once a total is
    /// known. Before the first response the request passes through as-is.
    pub fn current_page(&self) -> usize {
        match self.total_count {
            Some(_) => self.page.min(self.total_pages()),
            None => self.page,
        }
    }

    /// Derives the request descriptor for the committed filter state.
    pub fn descriptor(&self) -> QueryDescriptor {
        let mut descriptor = QueryDescriptor::default();
        descriptor.push("page", self.current_page().to_string());
        descriptor.push("pageSize", self.page_size.to_string());
        if let Some(from) = self.date_from {
            descriptor.push("from", from.format(DATE_FORMAT).to_string());
        }
        if let Some(to) = self.date_to {
            descriptor.push("to", to.format(DATE_FORMAT).to_string());
        }
        match SearchTerm::classify(&self.applied_search_text) {
            SearchTerm::Msisdn(value) => descriptor.push("msisdn", value),
            SearchTerm::Bnumber(value) => descriptor.push("bnumber", value),
            SearchTerm::Unclassified => {}
        }
        descriptor
    }
}

/// Parses a report date input; unparseable or blank values mean "absent".
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Ordered query parameters for one report request.
///
/// Two identical filter states always derive identical descriptors, so the
/// descriptor doubles as the request cache key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    params: Vec<(&'static str, String)>,
}

impl QueryDescriptor {
    fn push(&mut self, name: &'static str, value: String) {
        self.params.push((name, value));
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_always_carries_pagination() {
        let filter = ReportFilter::default();
        let descriptor = filter.descriptor();
        assert_eq!(descriptor.get("page"), Some("1"));
        assert_eq!(descriptor.get("pageSize"), Some("15"));
        assert_eq!(descriptor.get("from"), None);
        assert_eq!(descriptor.get("msisdn"), None);
    }

    #[test]
    fn classification_prefers_msisdn_over_bnumber() {
        assert_eq!(
            SearchTerm::classify("256771234567"),
            SearchTerm::Msisdn("256771234567".to_string())
        );
        assert_eq!(
            SearchTerm::classify("0771234567"),
            SearchTerm::Bnumber("0771234567".to_string())
        );
        assert_eq!(SearchTerm::classify("ACME LTD"), SearchTerm::Unclassified);
        assert_eq!(SearchTerm::classify("25677"), SearchTerm::Unclassified);
    }

    #[test]
    fn page_clamps_into_derived_range() {
        let mut filter = ReportFilter::default();
        filter.set_page(9);
        filter.record_total(30);
        assert_eq!(filter.total_pages(), 2);
        assert_eq!(filter.current_page(), 2);
        assert_eq!(filter.descriptor().get("page"), Some("2"));
    }
}
