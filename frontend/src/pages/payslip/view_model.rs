use super::repository::PayslipRepository;
use super::types::{PayslipDocument, PayslipError, PayslipState};
use super::utils::{
    deduction_percentage, payslip_file_name, selected_period_label, tax_percentage, year_options,
    PayslipFormState, PayslipSelection,
};
use crate::api::{ApiClient, ApiError};
use crate::state::session::use_session;
use crate::utils::download::{BrowserDocumentHost, DocumentHost, PDF_MIME_TYPE};
use crate::utils::time::current_year;
use leptos::*;
use std::rc::Rc;
use uuid::Uuid;

pub type DocumentHostContext = Rc<dyn DocumentHost>;

pub fn provide_document_host(host: DocumentHostContext) {
    provide_context::<DocumentHostContext>(host);
}

pub fn use_document_host() -> DocumentHostContext {
    use_context::<DocumentHostContext>().unwrap_or_else(|| Rc::new(BrowserDocumentHost))
}

/// Runs one data-then-document cycle and records the outcome in `state`.
///
/// An incomplete selection, a blank employee id, or a cycle already in
/// flight make this a no-op that leaves `state` untouched.
pub async fn fetch_payslip(
    employee_id: &str,
    selection: PayslipSelection,
    repo: &PayslipRepository,
    host: &dyn DocumentHost,
    state: RwSignal<PayslipState>,
) -> Result<(), PayslipError> {
    if !selection.is_complete() || employee_id.trim().is_empty() {
        return Ok(());
    }
    if state.with_untracked(|s| s.loading) {
        log::debug!("Payslip fetch already in flight, ignoring");
        return Ok(());
    }

    if let Some(previous) = state.try_update(PayslipState::begin).flatten() {
        host.release_handle(&previous.handle);
    }

    match load_payslip(employee_id, &selection, repo, host, state).await {
        Ok(document) => {
            log::info!("Payslip {} ready", document.file_name);
            state.update(|s| s.document_ready(document));
            Ok(())
        }
        Err(err) => {
            match &err {
                PayslipError::DataTransport(source) => {
                    log::error!("Payslip data error: {}", source)
                }
                PayslipError::DocumentTransport(source) => {
                    log::error!("Payslip PDF error: {}", source)
                }
                _ => {}
            }
            state.update(|s| s.fail(&err));
            Err(err)
        }
    }
}

async fn load_payslip(
    employee_id: &str,
    selection: &PayslipSelection,
    repo: &PayslipRepository,
    host: &dyn DocumentHost,
    state: RwSignal<PayslipState>,
) -> Result<PayslipDocument, PayslipError> {
    let record = repo
        .fetch_data(employee_id, selection)
        .await
        .map_err(PayslipError::DataTransport)?
        .into_record()?;
    state.update(|s| s.record_loaded(record));

    let bytes = repo
        .fetch_document(employee_id, selection)
        .await
        .map_err(PayslipError::DocumentTransport)?;
    let handle = host
        .create_handle(&bytes, PDF_MIME_TYPE)
        .map_err(|err| PayslipError::DocumentTransport(ApiError::unknown(err.to_string())))?;

    let file_name = payslip_file_name(employee_id, selection);
    if let Err(err) = host.save(&bytes, &file_name) {
        log::warn!("Failed to save {}: {}", file_name, err);
    }

    Ok(PayslipDocument {
        bytes: Rc::new(bytes),
        handle,
        file_name,
    })
}

#[derive(Clone)]
pub struct PayslipViewModel {
    pub form: PayslipFormState,
    pub state: RwSignal<PayslipState>,
    pub employee_id: String,
    pub years: Vec<i32>,
    pub fetch_action: Action<PayslipSelection, Result<(), PayslipError>>,
    host: DocumentHostContext,
}

impl PayslipViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = PayslipRepository::new_with_client(Rc::new(api));
        let host = use_document_host();

        let employee_id = use_session().employee_id().unwrap_or_default();
        if employee_id.is_empty() {
            log::warn!("No employee id in session storage");
        }
        let state = create_rw_signal(PayslipState::for_session(&employee_id));

        let action_employee = employee_id.clone();
        let action_host = host.clone();
        let fetch_action = create_action(move |selection: &PayslipSelection| {
            let repo = repo.clone();
            let host = action_host.clone();
            let employee_id = action_employee.clone();
            let selection = selection.clone();
            async move { fetch_payslip(&employee_id, selection, &repo, host.as_ref(), state).await }
        });

        let cleanup_host = host.clone();
        on_cleanup(move || {
            if let Some(Some(document)) = state.try_with_untracked(|s| s.document.clone()) {
                cleanup_host.release_handle(&document.handle);
            }
        });

        Self {
            form: PayslipFormState::new(),
            state,
            employee_id,
            years: year_options(current_year()),
            fetch_action,
            host,
        }
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.employee_id.is_empty() && self.form.selection().is_complete() && !self.loading()
    }

    pub fn fetch_payslip(&self) {
        let selection = self.form.selection_untracked();
        if !selection.is_complete()
            || self.employee_id.is_empty()
            || self.state.with_untracked(|s| s.loading)
        {
            return;
        }
        self.fetch_action.dispatch(selection);
    }

    fn current_document(&self) -> Option<PayslipDocument> {
        self.state.with_untracked(|s| s.document.clone())
    }

    pub fn print_payslip(&self) {
        if let Some(document) = self.current_document() {
            self.host.print(&document.handle);
        }
    }

    pub fn download_payslip(&self) {
        if let Some(document) = self.current_document() {
            if let Err(err) = self.host.save(&document.bytes, &document.file_name) {
                log::warn!("Failed to save {}: {}", document.file_name, err);
            }
        }
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.state.update(|s| s.dismiss_toast(id));
    }

    pub fn selected_period(&self) -> String {
        selected_period_label(&self.form.selection())
    }

    pub fn tax_percentage(&self) -> String {
        self.state.with(|s| tax_percentage(s.record.as_ref()))
    }

    pub fn deduction_percentage(&self) -> String {
        self.state.with(|s| deduction_percentage(s.record.as_ref()))
    }
}

pub fn use_payslip_view_model() -> PayslipViewModel {
    match use_context::<PayslipViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PayslipViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
