use dealerdesk::domain::report::{ReportFilter, SearchTerm, parse_report_date};
use dealerdesk::gateway::ReportSession;
use dealerdesk::gateway::types::ReportPage;

#[test]
fn reset_filters_is_idempotent() {
    let mut filter = ReportFilter::default();
    filter.set_search_text("256771234567");
    filter.apply_search();
    filter.set_date_from(parse_report_date("2026-01-01"));
    filter.set_date_to(parse_report_date("2026-06-30"));

    filter.reset_filters();
    let once = filter.clone();
    filter.reset_filters();

    assert_eq!(filter, once);
    assert_eq!(filter.descriptor(), once.descriptor());
}

#[test]
fn typing_without_apply_does_not_change_the_descriptor() {
    let mut filter = ReportFilter::default();
    let before = filter.descriptor();

    filter.set_search_text("256771234567");
    assert_eq!(filter.descriptor(), before);

    filter.apply_search();
    assert_ne!(filter.descriptor(), before);
    assert_eq!(filter.descriptor().get("msisdn"), Some("256771234567"));
}

#[test]
fn apply_search_trims_the_committed_term() {
    let mut filter = ReportFilter::default();
    filter.set_search_text("  256771234567  ");
    filter.apply_search();
    assert_eq!(filter.applied_search_text(), "256771234567");
    assert_eq!(filter.descriptor().get("msisdn"), Some("256771234567"));
}

#[test]
fn identifier_classification_is_mutually_exclusive() {
    let corpus = [
        "256771234567",
        "0771234567",
        "25677123456",
        "07712345678",
        "2567712345678",
        "hello",
        "256abc234567",
        "",
        "0000000000",
        "2560000000000",
    ];

    for term in corpus {
        let mut filter = ReportFilter::default();
        filter.set_search_text(term);
        filter.apply_search();
        let descriptor = filter.descriptor();

        let both = descriptor.get("msisdn").is_some() && descriptor.get("bnumber").is_some();
        assert!(!both, "both identifiers set for {term:?}");
    }

    // Primary pattern is checked first.
    assert!(matches!(
        SearchTerm::classify("256771234567"),
        SearchTerm::Msisdn(_)
    ));
    assert!(matches!(
        SearchTerm::classify("0771234567"),
        SearchTerm::Bnumber(_)
    ));
    assert!(matches!(
        SearchTerm::classify("warehouse"),
        SearchTerm::Unclassified
    ));
}

#[test]
fn absent_or_unparseable_dates_are_omitted() {
    let mut filter = ReportFilter::default();
    filter.set_date_from(parse_report_date("not-a-date"));
    filter.set_date_to(None);

    let descriptor = filter.descriptor();
    assert_eq!(descriptor.get("from"), None);
    assert_eq!(descriptor.get("to"), None);
    // No parameter is ever sent as an empty string.
    assert!(descriptor.params().iter().all(|(_, v)| !v.is_empty()));

    filter.set_date_from(parse_report_date("2026-02-01"));
    assert_eq!(filter.descriptor().get("from"), Some("2026-02-01"));
}

#[test]
fn zero_total_still_derives_one_page() {
    let mut filter = ReportFilter::default();
    filter.record_total(0);
    assert_eq!(filter.total_pages(), 1);
    assert_eq!(filter.current_page(), 1);
}

#[test]
fn example_scenario_activations_msisdn_search() {
    let mut filter = ReportFilter::default();
    filter.set_search_text("256771234567");
    filter.apply_search();

    let descriptor = filter.descriptor();
    assert_eq!(
        descriptor.params(),
        &[
            ("page", "1".to_string()),
            ("pageSize", "15".to_string()),
            ("msisdn", "256771234567".to_string()),
        ]
    );

    filter.record_total(3);
    assert_eq!(filter.total_pages(), 1);
}

#[test]
fn stale_responses_never_overwrite_fresher_state() {
    let session: ReportSession<&str> = ReportSession::new();

    // Request A is issued first, request B supersedes it.
    let a = session.begin();
    let b = session.begin();

    let b_page = ReportPage {
        rows: vec!["b"],
        total_count: 1,
    };
    let a_page = ReportPage {
        rows: vec!["a"],
        total_count: 9,
    };

    assert!(session.complete(b, b_page));
    // A resolves late and is discarded.
    assert!(!session.complete(a, a_page));

    let snapshot = session.snapshot().expect("page accepted");
    assert_eq!(snapshot.rows, vec!["b"]);
    assert_eq!(snapshot.total_count, 1);
}
