use crate::fmt::{field_value, irr_percent};
use crate::models::{Fields, Report};

/// One titled two-column table of a rendered report.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<(String, String)>,
}

/// Display-ready projection of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub sections: Vec<Section>,
    pub irr: String,
    pub pcap_date: String,
}

impl RenderedReport {
    pub fn irr_line(&self) -> String {
        format!("IRR: {} (as of PCAP Date: {})", self.irr, self.pcap_date)
    }
}

fn table_rows(fields: &Fields) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), field_value(value)))
        .collect()
}

/// Project a report into its tables and IRR line. No report renders nothing.
pub fn render(report: Option<&Report>) -> Option<RenderedReport> {
    let report = report?;
    Some(RenderedReport {
        sections: vec![
            Section {
                title: "LP Info",
                rows: table_rows(&report.lp_info),
            },
            Section {
                title: "Fund Data",
                rows: table_rows(&report.fund_data),
            },
            Section {
                title: "Totals",
                rows: table_rows(&report.totals),
            },
        ],
        irr: irr_percent(report.irr),
        pcap_date: report.pcap_report_date.clone(),
    })
}
