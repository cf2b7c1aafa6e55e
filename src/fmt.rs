use crate::models::FieldValue;

/// Group the integer digits of a non-negative decimal string with commas:
/// "1234567.89" -> "1,234,567.89".
fn group_thousands(fixed: &str) -> String {
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed, ""));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if dec_part.is_empty() {
        with_commas
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Format a number as a dollar amount with thousands separators: $1,234.56.
/// The sign follows the dollar sign: $-42.00.
pub fn currency(val: f64) -> String {
    let grouped = group_thousands(&format!("{:.2}", val.abs()));
    // -0.001 rounds to 0.00 and should not keep its sign
    if val < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Right-hand cell of a report table row.
pub fn field_value(val: &FieldValue) -> String {
    match val {
        FieldValue::Number(n) => currency(*n),
        FieldValue::Text(s) => s.clone(),
    }
}

/// IRR as a percentage with two decimals, or `N/A` when the API could not compute one.
pub fn irr_percent(irr: Option<f64>) -> String {
    match irr {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "N/A".to_string(),
    }
}
