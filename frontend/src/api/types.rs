use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status flag the payroll backend uses for a successful lookup.
pub const STATUS_SUCCESS: &str = "S";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PayslipDataRequest {
    #[serde(rename = "PERNR")]
    pub pernr: String,
    #[serde(rename = "MONTH")]
    pub month: String,
    #[serde(rename = "YEAR")]
    pub year: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayslipDocumentRequest {
    pub employee_id: String,
    pub month: String,
    pub year: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PayslipDataResponse {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "payslipData", default)]
    pub payslip_data: Option<PayslipRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PayslipDataResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// One employee's earnings and deductions for one pay period, as the
/// payroll backend reports it. Accounting identities are not checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PayslipRecord {
    #[serde(rename = "PERNR", default, deserialize_with = "text")]
    pub employee_id: String,
    #[serde(rename = "ENAME", default, deserialize_with = "text")]
    pub employee_name: String,
    #[serde(rename = "PLANS", default, deserialize_with = "text")]
    pub position: String,
    #[serde(rename = "BEGDA", default, deserialize_with = "text")]
    pub period_start: String,
    #[serde(rename = "ENDDA", default, deserialize_with = "text")]
    pub period_end: String,
    #[serde(rename = "BASIC_SALARY", default, deserialize_with = "amount")]
    pub basic_salary: f64,
    #[serde(rename = "ALLOWANCES", default, deserialize_with = "amount")]
    pub allowances: f64,
    #[serde(rename = "OVERTIME", default, deserialize_with = "amount")]
    pub overtime: f64,
    #[serde(rename = "GROSS_SALARY", default, deserialize_with = "amount")]
    pub gross_salary: f64,
    #[serde(rename = "TAX", default, deserialize_with = "amount")]
    pub tax: f64,
    #[serde(rename = "SOCIAL_SECURITY", default, deserialize_with = "amount")]
    pub social_security: f64,
    #[serde(rename = "INSURANCE", default, deserialize_with = "amount")]
    pub insurance: f64,
    #[serde(rename = "OTHER_DEDUCTIONS", default, deserialize_with = "amount")]
    pub other_deductions: f64,
    #[serde(rename = "TOTAL_DEDUCTIONS", default, deserialize_with = "amount")]
    pub total_deductions: f64,
    #[serde(rename = "NET_SALARY", default, deserialize_with = "amount")]
    pub net_salary: f64,
    #[serde(rename = "PAYMENT_DATE", default, deserialize_with = "text")]
    pub payment_date: String,
    #[serde(rename = "PAYMENT_METHOD", default, deserialize_with = "text")]
    pub payment_method: String,
    #[serde(rename = "CURRENCY", default, deserialize_with = "text")]
    pub currency: String,
}

// SAP gateways send amounts either as JSON numbers or as numeric strings.
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAmount::Number(value)) => value,
        Some(RawAmount::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    })
}

// Text fields may arrive as null or, for keys like PERNR, as bare numbers.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}
