use crate::api::PayslipRecord;
use crate::pages::payslip::utils::{format_currency, format_date, format_pay_period, NOT_AVAILABLE};
use leptos::*;

fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn SummarySection(
    record: PayslipRecord,
    #[prop(into)] selected_period: String,
    #[prop(into)] tax_percentage: String,
    #[prop(into)] deduction_percentage: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{"Payslip for "}{selected_period}</h3>
                <p class="text-sm text-fg-muted">
                    {"Pay period: "}{format_pay_period(&record.period_start, &record.period_end)}
                </p>
            </div>
            <dl class="grid grid-cols-1 gap-2 text-sm sm:grid-cols-2">
                <Detail label="Employee ID" value=or_not_available(&record.employee_id) />
                <Detail label="Name" value=or_not_available(&record.employee_name) />
                <Detail label="Position" value=or_not_available(&record.position) />
                <Detail label="Payment Date" value=format_date(&record.payment_date) />
                <Detail label="Payment Method" value=or_not_available(&record.payment_method) />
            </dl>
            <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                <Metric label="Gross Salary" value=format_currency(record.gross_salary) />
                <Metric
                    label="Total Deductions"
                    value=format_currency(record.total_deductions)
                    note=format!("{}% of gross", deduction_percentage)
                />
                <Metric label="Net Salary" value=format_currency(record.net_salary) />
            </div>
            <p class="text-xs text-fg-muted">{"Tax rate: "}{tax_percentage}{"%"}</p>
        </div>
    }
}

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-2">
            <dt class="text-fg-muted">{label}</dt>
            <dd class="font-medium text-fg">{value}</dd>
        </div>
    }
}

#[component]
fn Metric(
    label: &'static str,
    value: String,
    #[prop(optional, into)] note: Option<String>,
) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg border border-border bg-surface-muted">
            <p class="text-xs font-bold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="mt-2 text-2xl font-extrabold text-fg">{value}</p>
            {note.map(|note| view! { <p class="mt-1 text-xs text-fg-muted">{note}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::payslip_record, ssr::render_to_string};

    #[test]
    fn renders_totals_and_period() {
        let html = render_to_string(|| {
            view! {
                <SummarySection
                    record=payslip_record()
                    selected_period="March 2024"
                    tax_percentage="10.0"
                    deduction_percentage="16.0"
                />
            }
        });
        assert!(html.contains("March 2024"));
        assert!(html.contains("01 Mar 2024 – 31 Mar 2024"));
        assert!(html.contains("₹50,000.00"));
        assert!(html.contains("₹42,000.00"));
        assert!(html.contains("16.0% of gross"));
        assert!(html.contains("Asha Rao"));
    }

    #[test]
    fn blank_details_fall_back_to_not_available() {
        assert_eq!(or_not_available("  "), NOT_AVAILABLE);
        assert_eq!(or_not_available("Bank Transfer"), "Bank Transfer");
    }
}
