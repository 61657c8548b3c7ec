use std::rc::Rc;
use thiserror::Error;

use crate::api::{ApiError, PayslipDataResponse, PayslipRecord};
use crate::components::toast::Toast;

pub const NO_DATA_MESSAGE: &str = "No payslip data found for the selected period.";
pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "Payslip downloaded successfully!";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PayslipError {
    #[error("Employee ID not found. Please log in again.")]
    MissingSession,
    #[error("{0}")]
    NoData(String),
    #[error("Failed to fetch payslip data. Please try again.")]
    DataTransport(#[source] ApiError),
    #[error("Failed to fetch payslip PDF. Please try again.")]
    DocumentTransport(#[source] ApiError),
}

impl PayslipError {
    pub fn no_data(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| NO_DATA_MESSAGE.to_string());
        PayslipError::NoData(message)
    }

    pub fn toast_message(&self) -> String {
        match self {
            PayslipError::DataTransport(_) => "Error fetching payslip data!".to_string(),
            PayslipError::DocumentTransport(_) => "Error fetching payslip PDF!".to_string(),
            other => other.to_string(),
        }
    }
}

impl PayslipDataResponse {
    /// The record of a successful lookup, or the no-data error to show.
    pub fn into_record(self) -> Result<PayslipRecord, PayslipError> {
        match (self.is_success(), self.payslip_data) {
            (true, Some(record)) => Ok(record),
            _ => Err(PayslipError::no_data(self.message)),
        }
    }
}

/// A fetched payslip PDF and the access handle the page displays it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipDocument {
    pub bytes: Rc<Vec<u8>>,
    pub handle: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayslipState {
    pub loading: bool,
    pub error: Option<String>,
    pub record: Option<PayslipRecord>,
    pub document: Option<PayslipDocument>,
    pub toast: Option<Toast>,
}

impl PayslipState {
    pub fn for_session(employee_id: &str) -> Self {
        let mut state = Self::default();
        if employee_id.trim().is_empty() {
            state.error = Some(PayslipError::MissingSession.to_string());
        }
        state
    }

    /// Starts a fetch cycle and hands back the previous document so its
    /// handle can be released.
    pub fn begin(&mut self) -> Option<PayslipDocument> {
        self.loading = true;
        self.error = None;
        self.record = None;
        self.toast = None;
        self.document.take()
    }

    pub fn record_loaded(&mut self, record: PayslipRecord) {
        self.record = Some(record);
    }

    pub fn document_ready(&mut self, document: PayslipDocument) {
        self.loading = false;
        self.document = Some(document);
        self.toast = Some(Toast::success(DOWNLOAD_SUCCESS_MESSAGE));
    }

    pub fn fail(&mut self, error: &PayslipError) {
        self.loading = false;
        self.error = Some(error.to_string());
        self.toast = Some(Toast::error(error.toast_message()));
    }

    pub fn dismiss_toast(&mut self, id: uuid::Uuid) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}
