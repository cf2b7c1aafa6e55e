use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::api::LpApi;
use crate::error::Result;
use crate::models::{Report, ReportRequest};

/// A finished background call, delivered back to the UI thread.
pub enum FetchOutcome {
    Lps(Result<Vec<String>>),
    Report(ReportRequest, Result<Report>),
}

/// Runs API calls on worker threads so the event loop never blocks.
/// Each request gets its own thread and there is no cancellation; outcomes
/// are delivered in completion order.
pub struct Fetcher {
    api: Arc<dyn LpApi>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl Fetcher {
    pub fn new(api: Arc<dyn LpApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    pub fn load_lps(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(FetchOutcome::Lps(api.list_lps()));
        });
    }

    pub fn fetch_report(&self, request: ReportRequest) {
        tracing::debug!(lp = %request.lp_id, date = %request.report_date, "fetching report");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = api.fetch_report(&request);
            let _ = tx.send(FetchOutcome::Report(request, result));
        });
    }

    /// Outcomes that have arrived since the last call, oldest first.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }

    /// Block until the next outcome arrives.
    #[cfg(test)]
    pub fn recv(&self) -> Option<FetchOutcome> {
        self.rx.recv_timeout(std::time::Duration::from_secs(5)).ok()
    }
}
