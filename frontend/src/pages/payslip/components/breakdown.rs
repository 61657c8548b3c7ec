use crate::api::PayslipRecord;
use crate::pages::payslip::utils::format_currency;
use leptos::*;

#[component]
pub fn BreakdownSection(record: PayslipRecord) -> impl IntoView {
    let earnings = [
        ("Basic Salary", record.basic_salary),
        ("Allowances", record.allowances),
        ("Overtime", record.overtime),
    ];
    let deductions = [
        ("Tax", record.tax),
        ("Social Security", record.social_security),
        ("Insurance", record.insurance),
        ("Other Deductions", record.other_deductions),
    ];

    view! {
        <div class="grid grid-cols-1 gap-4 lg:grid-cols-2">
            <BreakdownTable
                title="Earnings"
                rows=earnings.to_vec()
                total_label="Gross Salary"
                total=record.gross_salary
            />
            <BreakdownTable
                title="Deductions"
                rows=deductions.to_vec()
                total_label="Total Deductions"
                total=record.total_deductions
            />
        </div>
    }
}

#[component]
fn BreakdownTable(
    title: &'static str,
    rows: Vec<(&'static str, f64)>,
    total_label: &'static str,
    total: f64,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            <h4 class="text-sm font-semibold text-fg mb-2">{title}</h4>
            <table class="w-full text-sm">
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(label, amount)| view! {
                            <tr>
                                <td class="py-1 text-fg-muted">{label}</td>
                                <td class="py-1 text-right text-fg">{format_currency(amount)}</td>
                            </tr>
                        })
                        .collect_view()}
                    <tr class="border-t border-border font-semibold">
                        <td class="py-1">{total_label}</td>
                        <td class="py-1 text-right">{format_currency(total)}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
