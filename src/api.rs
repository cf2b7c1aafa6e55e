//! Client for the LP reporting API.
//!
//! Two read-only endpoints are consumed: the LP listing and the per-LP report.
//! The dashboard calls these from worker threads, so the client is blocking.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;

use crate::error::{LpError, Result};
use crate::models::{Report, ReportRequest};

/// Source of LP identifiers and reports. The dashboard and CLI only talk to
/// the API through this trait.
pub trait LpApi: Send + Sync {
    fn list_lps(&self) -> Result<Vec<String>>;
    fn fetch_report(&self, request: &ReportRequest) -> Result<Report>;
}

pub struct HttpLpApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLpApi {
    /// The blocking client has a 30s default timeout. Requests here wait for
    /// the server however long it takes.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn lps_url(&self) -> Result<Url> {
        parse_base(&self.base_url)?
            .join("api/lps")
            .map_err(|e| LpError::Url(e.to_string()))
    }

    /// `{base}/api/lp/{lpId}?report_date=YYYY-MM-DD` with the id as one encoded segment.
    pub fn report_url(&self, lp_id: &str, report_date: NaiveDate) -> Result<Url> {
        let mut url = parse_base(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| LpError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "lp", lp_id]);
        url.query_pairs_mut()
            .append_pair("report_date", &report_date.format("%Y-%m-%d").to_string());
        Ok(url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LpError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Parse the base URL so that `join` appends below it instead of replacing the last segment.
fn parse_base(base_url: &str) -> Result<Url> {
    let with_slash = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&with_slash).map_err(|e| LpError::Url(format!("{base_url}: {e}")))
}

impl LpApi for HttpLpApi {
    fn list_lps(&self) -> Result<Vec<String>> {
        self.get_json(self.lps_url()?)
    }

    fn fetch_report(&self, request: &ReportRequest) -> Result<Report> {
        self.get_json(self.report_url(&request.lp_id, request.report_date)?)
    }
}
