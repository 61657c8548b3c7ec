use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::PayslipPage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting payslip frontend (wasm)");

    // Runtime config loads in the background; API calls await it.
    leptos::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App /> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Payslip" />
        <Router>
            <Routes>
                <Route path="/" view=PayslipPage />
                <Route path="/payslip" view=PayslipPage />
            </Routes>
        </Router>
    }
}
