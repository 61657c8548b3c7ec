use leptos::*;

#[component]
pub fn Header(#[prop(optional_no_strip)] employee_id: Option<String>) -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Employee Self-Service"</h1>
                    <nav class="flex items-center space-x-4">
                        <a href="/payslip" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Payslip"
                        </a>
                        {employee_id.map(|id| view! {
                            <span class="text-sm text-fg-muted">{"Employee "}{id}</span>
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    #[prop(optional_no_strip)] employee_id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header employee_id=employee_id />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-2 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}
