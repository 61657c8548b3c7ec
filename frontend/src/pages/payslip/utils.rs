use chrono::{DateTime, NaiveDate, NaiveDateTime};
use leptos::*;

use crate::api::PayslipRecord;
use crate::config;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of selectable years, counting the current one.
pub const YEAR_SPAN: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthOption {
    pub code: &'static str,
    pub name: &'static str,
}

pub const MONTHS: [MonthOption; 12] = [
    MonthOption { code: "01", name: "January" },
    MonthOption { code: "02", name: "February" },
    MonthOption { code: "03", name: "March" },
    MonthOption { code: "04", name: "April" },
    MonthOption { code: "05", name: "May" },
    MonthOption { code: "06", name: "June" },
    MonthOption { code: "07", name: "July" },
    MonthOption { code: "08", name: "August" },
    MonthOption { code: "09", name: "September" },
    MonthOption { code: "10", name: "October" },
    MonthOption { code: "11", name: "November" },
    MonthOption { code: "12", name: "December" },
];

pub fn month_name(code: &str) -> Option<&'static str> {
    MONTHS.iter().find(|m| m.code == code).map(|m| m.name)
}

/// Current year first, then the nine before it.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - (YEAR_SPAN - 1)..=current_year).rev().collect()
}

/// Snapshot of the month/year selection at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayslipSelection {
    pub month: String,
    pub year: String,
}

impl PayslipSelection {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.month.trim().is_empty() && !self.year.trim().is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct PayslipFormState {
    pub month: RwSignal<String>,
    pub year: RwSignal<String>,
}

impl Default for PayslipFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl PayslipFormState {
    pub fn new() -> Self {
        Self {
            month: create_rw_signal(String::new()),
            year: create_rw_signal(String::new()),
        }
    }

    pub fn selection(&self) -> PayslipSelection {
        PayslipSelection::new(self.month.get(), self.year.get())
    }

    pub fn selection_untracked(&self) -> PayslipSelection {
        PayslipSelection::new(self.month.get_untracked(), self.year.get_untracked())
    }
}

pub fn payslip_file_name(employee_id: &str, selection: &PayslipSelection) -> String {
    format!(
        "Payslip_{}_{}{}.pdf",
        employee_id, selection.year, selection.month
    )
}

pub fn selected_period_label(selection: &PayslipSelection) -> String {
    if !selection.is_complete() {
        return String::new();
    }
    let name = month_name(&selection.month).unwrap_or_default();
    format!("{} {}", name, selection.year)
}

/// Anything the currency formatter accepts: numbers, numeric strings, or
/// nothing at all.
pub trait Amount {
    fn to_amount(&self) -> Option<f64>;
}

impl Amount for f64 {
    fn to_amount(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Amount for str {
    fn to_amount(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl Amount for String {
    fn to_amount(&self) -> Option<f64> {
        self.as_str().to_amount()
    }
}

impl<T: Amount> Amount for Option<T> {
    fn to_amount(&self) -> Option<f64> {
        self.as_ref().and_then(Amount::to_amount)
    }
}

impl<T: Amount + ?Sized> Amount for &T {
    fn to_amount(&self) -> Option<f64> {
        (**self).to_amount()
    }
}

/// en-IN currency: rupee symbol, lakh/crore grouping, two decimals.
pub fn format_currency(amount: impl Amount) -> String {
    let value = amount
        .to_amount()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);
    format!("{}{}", CURRENCY_SYMBOL, format_indian_number(value))
}

fn format_indian_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_indian_digits(integer), fraction)
}

// Last three digits form one group, everything before groups in pairs.
fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

fn parse_display_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(
            timestamp
                .with_timezone(&config::display_time_zone())
                .date_naive(),
        );
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    // SAP DATS (YYYYMMDD)
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value[0..4].parse().ok()?;
        let month = value[4..6].parse().ok()?;
        let day = value[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

/// "15 Mar 2024"; blank input is "N/A", unparsable input comes back as is.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    match parse_display_date(trimmed) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => value.to_string(),
    }
}

pub fn format_pay_period(start: &str, end: &str) -> String {
    if start.trim().is_empty() || end.trim().is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{} – {}", format_date(start), format_date(end))
}

fn share_of_gross(record: Option<&PayslipRecord>, part: impl Fn(&PayslipRecord) -> f64) -> String {
    let Some(record) = record else {
        return "0.0".to_string();
    };
    let gross = record.gross_salary;
    let numerator = part(record);
    if gross == 0.0 || numerator == 0.0 || !gross.is_finite() || !numerator.is_finite() {
        return "0.0".to_string();
    }
    let percentage = numerator / gross * 100.0;
    format!("{:.1}", (percentage * 10.0).round() / 10.0)
}

pub fn tax_percentage(record: Option<&PayslipRecord>) -> String {
    share_of_gross(record, |r| r.tax)
}

pub fn deduction_percentage(record: Option<&PayslipRecord>) -> String {
    share_of_gross(record, |r| r.total_deductions)
}
