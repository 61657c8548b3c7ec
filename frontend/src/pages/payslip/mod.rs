pub mod components;
pub mod panel;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

use crate::components::layout::Layout;
use leptos::*;
use panel::PayslipPanel;
use view_model::use_payslip_view_model;

#[component]
pub fn PayslipPage() -> impl IntoView {
    let vm = use_payslip_view_model();
    let employee_id = Some(vm.employee_id.clone()).filter(|id| !id.is_empty());
    view! {
        <Layout employee_id=employee_id>
            <PayslipPanel />
        </Layout>
    }
}
