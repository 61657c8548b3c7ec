use leptos::*;
use std::rc::Rc;

use crate::utils::storage as storage_utils;

/// Key written by the login flow.
pub const EMPLOYEE_ID_KEY: &str = "employeeId";

pub trait SessionProvider {
    /// Personnel number (PERNR) of the logged-in employee, if any.
    fn employee_id(&self) -> Option<String>;
}

pub type SessionContext = Rc<dyn SessionProvider>;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn employee_id(&self) -> Option<String> {
        match storage_utils::read_item(EMPLOYEE_ID_KEY) {
            Ok(value) => normalize_employee_id(value),
            Err(err) => {
                log::warn!("Session storage unavailable: {}", err);
                None
            }
        }
    }
}

/// Fixed identifier, for embedding the page behind another auth layer.
#[derive(Clone, Debug, Default)]
pub struct StaticSession(pub Option<String>);

impl SessionProvider for StaticSession {
    fn employee_id(&self) -> Option<String> {
        normalize_employee_id(self.0.clone())
    }
}

fn normalize_employee_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}

pub fn provide_session(session: SessionContext) {
    provide_context::<SessionContext>(session);
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| Rc::new(LocalStorageSession))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn static_session_trims_and_rejects_blank_ids() {
        assert_eq!(
            StaticSession(Some(" E1001 ".into())).employee_id().as_deref(),
            Some("E1001")
        );
        assert!(StaticSession(Some("   ".into())).employee_id().is_none());
        assert!(StaticSession(None).employee_id().is_none());
    }

    #[test]
    fn use_session_prefers_provided_context() {
        with_runtime(|| {
            provide_session(Rc::new(StaticSession(Some("E2002".into()))));
            assert_eq!(use_session().employee_id().as_deref(), Some("E2002"));
        });
    }

    #[test]
    fn use_session_falls_back_to_local_storage() {
        with_runtime(|| {
            // no browser storage on the host target
            assert!(use_session().employee_id().is_none());
        });
    }
}
