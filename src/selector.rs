use chrono::NaiveDate;

use crate::error::{LpError, Result};
use crate::models::{Report, ReportRequest};

/// Selection state for the dashboard: the LP list, the current (LP, date)
/// pair and the report last fetched for it.
///
/// Setters return the [`ReportRequest`] the caller should issue, so a
/// selection change always schedules a refetch once an LP is chosen.
#[derive(Debug, Clone)]
pub struct Selector {
    lps: Vec<String>,
    selected_lp: Option<String>,
    report_date: NaiveDate,
    today: NaiveDate,
    report: Option<Report>,
}

impl Selector {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            lps: Vec::new(),
            selected_lp: None,
            report_date: today,
            today,
            report: None,
        }
    }

    pub fn lps(&self) -> &[String] {
        &self.lps
    }

    pub fn selected_lp(&self) -> Option<&str> {
        self.selected_lp.as_deref()
    }

    pub fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Move the upper bound for report dates. The current date and report are kept.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Apply the outcome of the startup listing call. A failure leaves the list empty.
    pub fn apply_lps(&mut self, result: Result<Vec<String>>) {
        match result {
            Ok(lps) => {
                tracing::info!(count = lps.len(), "loaded LP list");
                self.lps = lps;
            }
            Err(e) => tracing::warn!(error = %e, "failed to load LP list"),
        }
    }

    /// Select an LP from the loaded list. Ids not in the list are ignored.
    pub fn select_lp(&mut self, id: &str) -> Option<ReportRequest> {
        if !self.lps.iter().any(|lp| lp == id) {
            tracing::debug!(lp = id, "ignoring selection of unknown LP");
            return None;
        }
        self.selected_lp = Some(id.to_string());
        self.refetch_report()
    }

    /// Set the report date. Dates after today are rejected and leave the state unchanged.
    pub fn select_report_date(&mut self, date: NaiveDate) -> Result<Option<ReportRequest>> {
        if date > self.today {
            return Err(LpError::FutureDate(date));
        }
        self.report_date = date;
        Ok(self.refetch_report())
    }

    /// The fetch to issue for the current selection, if an LP is selected.
    pub fn refetch_report(&self) -> Option<ReportRequest> {
        self.selected_lp.as_ref().map(|lp| ReportRequest {
            lp_id: lp.clone(),
            report_date: self.report_date,
        })
    }

    /// Apply a finished report fetch. Success replaces the held report in
    /// full; failure is logged and changes nothing. Results are applied in
    /// arrival order, whichever selection they were requested for.
    pub fn apply_report(&mut self, request: &ReportRequest, result: Result<Report>) {
        match result {
            Ok(report) => {
                tracing::info!(lp = %request.lp_id, date = %request.report_date, "report loaded");
                self.report = Some(report);
            }
            Err(e) => tracing::warn!(
                lp = %request.lp_id,
                date = %request.report_date,
                error = %e,
                "report fetch failed"
            ),
        }
    }
}
