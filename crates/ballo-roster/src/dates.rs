//! Record-boundary date handling.
//!
//! Federation spreadsheets carry dates in whatever shape the operator typed.
//! They are normalized to ISO `YYYY-MM-DD` once, when a record is read, so
//! the kernel only ever sees ISO dates.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn day_month_short_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2})$").expect("dd/mm/yy regex must compile")
    })
}

fn day_month_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$").expect("dd/mm/yyyy regex must compile")
    })
}

fn year_month_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("yyyy/mm/dd regex must compile")
    })
}

fn category_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)cat:\s*(.+)").expect("category cell regex must compile"))
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parse a loosely formatted date.
///
/// Day-first forms (`DD/MM/YY`, `DD/MM/YYYY`, `/` or `-` separated) win over
/// month-first. Two-digit years above 50 are 19xx, the rest 20xx. Returns
/// `None` for blank input, unknown shapes and impossible calendar dates.
pub fn parse_loose_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = day_month_short_year_re().captures(trimmed) {
        let short: u32 = caps[3].parse().ok()?;
        let century = if short > 50 { "19" } else { "20" };
        return ymd(&format!("{century}{}", &caps[3]), &caps[2], &caps[1]);
    }
    if let Some(caps) = day_month_year_re().captures(trimmed) {
        return ymd(&caps[3], &caps[2], &caps[1]);
    }
    if let Some(caps) = year_month_day_re().captures(trimmed) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }
    ballo_kernel::parse_birth_date(trimmed).ok()
}

/// Normalize a loosely formatted date to ISO `YYYY-MM-DD`.
pub fn normalize_date(input: &str) -> Option<String> {
    parse_loose_date(input).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Italian display format, `dd/mm/yyyy`.
pub fn format_italian_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Reduce a spreadsheet category cell such as `"cat: Adult"` to `"Adult"`.
pub fn parse_category_cell(cell: &str) -> String {
    match category_cell_re().captures(cell) {
        Some(caps) => caps[1].trim().to_string(),
        None => cell.trim().to_string(),
    }
}
