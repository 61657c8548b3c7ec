use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (SSR tests) have no browser globals to bind to.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|_| format!("Failed to read {}", key))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn storage_is_unavailable_off_browser() {
        assert_eq!(local_storage().err().as_deref(), Some("No window object"));
        assert!(read_item("employeeId").is_err());
    }
}
