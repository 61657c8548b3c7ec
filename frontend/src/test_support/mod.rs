#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::PayslipRecord;
    use crate::utils::download::{DocumentHost, DownloadError};
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};

    /// Payroll payload for March 2024: 10% tax, 16% total deductions.
    pub fn payslip_json() -> Value {
        json!({
            "PERNR": "E1001",
            "ENAME": "Asha Rao",
            "PLANS": "Payroll Analyst",
            "BEGDA": "2024-03-01",
            "ENDDA": "2024-03-31",
            "BASIC_SALARY": "40000.00",
            "ALLOWANCES": 8000,
            "OVERTIME": 2000,
            "GROSS_SALARY": 50000,
            "TAX": 5000,
            "SOCIAL_SECURITY": "1800",
            "INSURANCE": 700,
            "OTHER_DEDUCTIONS": 500,
            "TOTAL_DEDUCTIONS": 8000,
            "NET_SALARY": 42000,
            "PAYMENT_DATE": "2024-03-31",
            "PAYMENT_METHOD": "Bank Transfer",
            "CURRENCY": "INR"
        })
    }

    pub fn payslip_record() -> PayslipRecord {
        serde_json::from_value(payslip_json()).expect("fixture payload")
    }

    /// Document host that records every call instead of touching a browser.
    #[derive(Default)]
    pub struct RecordingHost {
        fail_create: bool,
        next_id: Cell<usize>,
        created: RefCell<Vec<String>>,
        released: RefCell<Vec<String>>,
        saved: RefCell<Vec<(String, usize)>>,
        printed: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        pub fn failing_create() -> Self {
            Self {
                fail_create: true,
                ..Self::default()
            }
        }

        pub fn created(&self) -> Vec<String> {
            self.created.borrow().clone()
        }

        pub fn released(&self) -> Vec<String> {
            self.released.borrow().clone()
        }

        pub fn saved(&self) -> Vec<(String, usize)> {
            self.saved.borrow().clone()
        }

        pub fn printed(&self) -> Vec<String> {
            self.printed.borrow().clone()
        }
    }

    impl DocumentHost for RecordingHost {
        fn create_handle(&self, _bytes: &[u8], _mime_type: &str) -> Result<String, DownloadError> {
            if self.fail_create {
                return Err(DownloadError::ObjectUrl);
            }
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            let handle = format!("blob:payslip-{}", id);
            self.created.borrow_mut().push(handle.clone());
            Ok(handle)
        }

        fn release_handle(&self, handle: &str) {
            self.released.borrow_mut().push(handle.to_string());
        }

        fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), bytes.len()));
            Ok(())
        }

        fn print(&self, handle: &str) {
            self.printed.borrow_mut().push(handle.to_string());
        }
    }
}
