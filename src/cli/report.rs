use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::api::LpApi;
use crate::error::{LpError, Result};
use crate::models::ReportRequest;
use crate::render::{render, RenderedReport};

use super::{api_client, parse_date, today};

pub fn run(api_url: Option<&str>, lp: &str, date: Option<&str>) -> Result<()> {
    let api = api_client(api_url)?;
    let s = fetch_text(&api, lp, date)?;
    println!("{s}");
    Ok(())
}

/// Validate the selection, fetch the report and format it as text.
pub fn fetch_text(api: &dyn LpApi, lp: &str, date: Option<&str>) -> Result<String> {
    let today = today();
    let report_date = match date {
        Some(d) => parse_date(d)?,
        None => today,
    };
    if report_date > today {
        return Err(LpError::FutureDate(report_date));
    }

    // Only identifiers from the listing endpoint are selectable
    let lps = api.list_lps()?;
    if !lps.iter().any(|known| known == lp) {
        return Err(LpError::UnknownLp(lp.to_string()));
    }

    let request = ReportRequest {
        lp_id: lp.to_string(),
        report_date,
    };
    let report = api.fetch_report(&request)?;
    tracing::info!(lp, date = %report_date, "report fetched");

    let heading_date = report
        .report_date
        .clone()
        .unwrap_or_else(|| report_date.format("%Y-%m-%d").to_string());
    let rendered = render(Some(&report)).ok_or_else(|| LpError::Other("nothing to render".into()))?;
    Ok(format!("{lp} as of {heading_date}\n\n{}", format_report(&rendered)))
}

// ---------------------------------------------------------------------------
// Pure formatting (rendered report -> String)
// ---------------------------------------------------------------------------

pub fn format_report(rendered: &RenderedReport) -> String {
    let mut out = String::new();
    for section in &rendered.sections {
        let mut table = Table::new();
        for (key, value) in &section.rows {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }
        if section.rows.is_empty() {
            out.push_str(&format!("{}\n(none)\n\n", section.title.bold()));
        } else {
            out.push_str(&format!("{}\n{table}\n\n", section.title.bold()));
        }
    }
    out.push_str(&rendered.irr_line());
    out
}
