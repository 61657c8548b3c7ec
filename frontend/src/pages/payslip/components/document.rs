use crate::components::common::ButtonVariant;
use leptos::*;

fn button_class(variant: ButtonVariant) -> String {
    format!(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}",
        variant.classes()
    )
}

/// Embedded viewer for the fetched PDF plus print and re-download actions.
#[component]
pub fn DocumentSection(
    #[prop(into)] handle: String,
    #[prop(into)] file_name: String,
    on_print: Callback<()>,
    on_download: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h4 class="text-sm font-semibold text-fg">{file_name.clone()}</h4>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Secondary)
                        on:click=move |_| on_print.call(())
                    >
                        {"Print"}
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary)
                        on:click=move |_| on_download.call(())
                    >
                        {"Download"}
                    </button>
                </div>
            </div>
            <iframe
                class="w-full h-[600px] rounded border border-border"
                title=file_name
                src=handle
            ></iframe>
        </div>
    }
}
