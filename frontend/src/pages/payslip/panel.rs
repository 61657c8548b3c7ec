use super::{
    components::{BreakdownSection, DocumentSection, PayslipForm, SummarySection},
    view_model::use_payslip_view_model,
};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner, toast::ToastHost,
};
use leptos::*;
use uuid::Uuid;

#[component]
pub fn PayslipPanel() -> impl IntoView {
    let vm = use_payslip_view_model();
    let state = vm.state;

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let toast = Signal::derive(move || state.with(|s| s.toast.clone()));
    let idle = Signal::derive(move || {
        state.with(|s| !s.loading && s.record.is_none() && s.error.is_none())
    });
    let can_submit = {
        let vm = vm.clone();
        Signal::derive(move || vm.can_submit())
    };

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.fetch_payslip())
    };
    let on_print = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.print_payslip())
    };
    let on_download = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.download_payslip())
    };
    let on_dismiss = {
        let vm = vm.clone();
        Callback::new(move |id: Uuid| vm.dismiss_toast(id))
    };

    let summary_vm = vm.clone();
    let record_view = move || {
        state.with(|s| s.record.clone()).map(|record| {
            view! {
                <SummarySection
                    record=record.clone()
                    selected_period=summary_vm.selected_period()
                    tax_percentage=summary_vm.tax_percentage()
                    deduction_percentage=summary_vm.deduction_percentage()
                />
                <BreakdownSection record=record />
            }
        })
    };

    let document_view = move || {
        state.with(|s| s.document.clone()).map(|document| {
            view! {
                <DocumentSection
                    handle=document.handle
                    file_name=document.file_name
                    on_print=on_print.clone()
                    on_download=on_download.clone()
                />
            }
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Payslip"}</h2>
                <p class="mt-1 text-sm text-fg-muted">
                    {"Select a month and year to view and download your payslip."}
                </p>
            </div>
            <PayslipForm
                month=vm.form.month
                year=vm.form.year
                years=vm.years.clone()
                loading=loading
                can_submit=can_submit
                on_submit=on_submit
            />
            <InlineErrorMessage error=error />
            <Show when=move || loading.get()>
                <LoadingSpinner label="Fetching payslip..." />
            </Show>
            <Show when=move || idle.get()>
                <EmptyState
                    title="No payslip selected"
                    description="Choose a month and year, then press Get Payslip."
                />
            </Show>
            {record_view}
            {document_view}
            <ToastHost toast=toast on_dismiss=on_dismiss />
        </div>
    }
}
