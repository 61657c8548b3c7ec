use super::utils::PayslipSelection;
use crate::api::{
    ApiClient, ApiError, PayslipDataRequest, PayslipDataResponse, PayslipDocumentRequest,
};
use std::rc::Rc;

fn validate(employee_id: &str, selection: &PayslipSelection) -> Result<(), ApiError> {
    if employee_id.trim().is_empty() {
        return Err(ApiError::validation("Employee ID is required"));
    }
    if !selection.is_complete() {
        return Err(ApiError::validation("Month and year are required"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct PayslipRepository {
    client: Rc<ApiClient>,
}

impl Default for PayslipRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PayslipRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_data(
        &self,
        employee_id: &str,
        selection: &PayslipSelection,
    ) -> Result<PayslipDataResponse, ApiError> {
        validate(employee_id, selection)?;
        let request = PayslipDataRequest {
            pernr: employee_id.to_string(),
            month: selection.month.clone(),
            year: selection.year.clone(),
        };
        self.client.fetch_payslip_data(&request).await
    }

    pub async fn fetch_document(
        &self,
        employee_id: &str,
        selection: &PayslipSelection,
    ) -> Result<Vec<u8>, ApiError> {
        validate(employee_id, selection)?;
        let request = PayslipDocumentRequest {
            employee_id: employee_id.to_string(),
            month: selection.month.clone(),
            year: selection.year.clone(),
        };
        self.client.fetch_payslip_pdf(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn incomplete_input_is_rejected_before_sending() {
        let server = MockServer::start_async().await;
        let repo = PayslipRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url(""),
        )));

        let err = repo
            .fetch_data("", &PayslipSelection::new("03", "2024"))
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");

        let err = repo
            .fetch_document("E1001", &PayslipSelection::new("", "2024"))
            .await
            .unwrap_err();
        assert_eq!(err.error, "Month and year are required");
        assert_eq!(server.total_hits(), 0);
    }
}
