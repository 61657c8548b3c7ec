use super::{
    client::ApiClient,
    types::{ApiError, PayslipDataRequest, PayslipDataResponse, PayslipDocumentRequest},
};

impl ApiClient {
    pub async fn fetch_payslip_data(
        &self,
        request: &PayslipDataRequest,
    ) -> Result<PayslipDataResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/payslipdata", base_url))
                    .json(request),
            )
            .await?;
        Self::map_json_response(response).await
    }

    /// Returns the raw PDF bytes of the payslip document.
    pub async fn fetch_payslip_pdf(
        &self,
        request: &PayslipDocumentRequest,
    ) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/paymentslip", base_url))
                    .header(reqwest::header::ACCEPT, "application/pdf")
                    .json(request),
            )
            .await?;
        Self::map_bytes_response(response).await
    }
}
