use crate::components::common::ButtonVariant;
use crate::pages::payslip::utils::MONTHS;
use leptos::*;

#[component]
pub fn PayslipForm(
    month: RwSignal<String>,
    year: RwSignal<String>,
    years: Vec<i32>,
    loading: Signal<bool>,
    can_submit: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-end"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <label class="flex flex-col gap-1 text-sm font-medium text-fg w-full lg:w-48">
                {"Month"}
                <select
                    class="rounded-md border border-border px-3 py-2"
                    prop:value=move || month.get()
                    on:change=move |ev| month.set(event_target_value(&ev))
                >
                    <option value="">{"Select Month"}</option>
                    {MONTHS
                        .iter()
                        .map(|option| view! { <option value=option.code>{option.name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="flex flex-col gap-1 text-sm font-medium text-fg w-full lg:w-48">
                {"Year"}
                <select
                    class="rounded-md border border-border px-3 py-2"
                    prop:value=move || year.get()
                    on:change=move |ev| year.set(event_target_value(&ev))
                >
                    <option value="">{"Select Year"}</option>
                    {years
                        .into_iter()
                        .map(|y| {
                            let value = y.to_string();
                            view! { <option value=value.clone()>{value}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <button
                type="submit"
                class=format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                    ButtonVariant::Primary.classes()
                )
                disabled=move || !can_submit.get()
            >
                {move || if loading.get() { "Loading..." } else { "Get Payslip" }}
            </button>
        </form>
    }
}
