//! Request ordering guard for report screens.
//!
//! Filter changes can put several requests in flight at once; the session
//! numbers them as they are issued and only ever keeps the newest accepted
//! response, so a slow superseded request can never overwrite fresher rows.
//! A failed refresh leaves the last successful page in place.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;

use crate::domain::report::ReportFilter;
use crate::gateway::types::ReportPage;
use crate::gateway::{GatewayClient, GatewayResult};

/// Issue order of one report request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

struct SessionState<T> {
    accepted_seq: u64,
    page: Option<ReportPage<T>>,
}

/// Per-screen-instance report state. Not shared across screens.
pub struct ReportSession<T> {
    issued: AtomicU64,
    state: Mutex<SessionState<T>>,
}

impl<T> Default for ReportSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReportSession<T> {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            state: Mutex::new(SessionState {
                accepted_seq: 0,
                page: None,
            }),
        }
    }

    /// Reserves the next issue number. Must be called before the request is
    /// sent so that ordering reflects issue time, not completion time.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Offers a completed response. Returns `false` when a newer request has
    /// already been accepted, in which case the response is discarded.
    pub fn complete(&self, ticket: RequestTicket, page: ReportPage<T>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.0 > state.accepted_seq {
            state.accepted_seq = ticket.0;
            state.page = Some(page);
            true
        } else {
            false
        }
    }
}

impl<T: Clone> ReportSession<T> {
    /// Most recent accepted page, if any request has succeeded yet.
    pub fn snapshot(&self) -> Option<ReportPage<T>> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.page.clone()
    }
}

impl<T: Clone + DeserializeOwned> ReportSession<T> {
    /// Re-issues the report request for the committed filter state and
    /// returns the newest accepted page. Errors keep previously fetched rows.
    pub async fn refresh(
        &self,
        client: &GatewayClient,
        path: &str,
        filter: &ReportFilter,
    ) -> GatewayResult<Option<ReportPage<T>>> {
        let ticket = self.begin();
        let page = client.fetch_report::<T>(path, &filter.descriptor()).await?;
        self.complete(ticket, page);
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize) -> ReportPage<u32> {
        ReportPage {
            rows: vec![],
            total_count: total,
        }
    }

    #[test]
    fn newest_request_wins_regardless_of_completion_order() {
        let session = ReportSession::new();
        let first = session.begin();
        let second = session.begin();

        assert!(session.complete(second, page(2)));
        assert!(!session.complete(first, page(1)));

        assert_eq!(session.snapshot().unwrap().total_count, 2);
    }

    #[test]
    fn snapshot_is_empty_until_a_request_completes() {
        let session: ReportSession<u32> = ReportSession::new();
        let _ = session.begin();
        assert!(session.snapshot().is_none());
    }
}
