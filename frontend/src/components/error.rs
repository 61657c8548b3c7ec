use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
            >
                <p class="text-sm font-medium">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(
                "Failed to fetch payslip data. Please try again.".to_string(),
            ));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Failed to fetch payslip data. Please try again."));
    }

    #[test]
    fn inline_error_is_empty_without_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
