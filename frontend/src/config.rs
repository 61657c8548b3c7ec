use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3030";

/// Payslips are rendered with Indian regional conventions, dates included.
pub const DISPLAY_TIME_ZONE: Tz = chrono_tz::Asia::Kolkata;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn display_time_zone() -> Tz {
    DISPLAY_TIME_ZONE
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__PAYSLIP_ENV (env.js) wins over window.__PAYSLIP_CONFIG
    read_global_key("__PAYSLIP_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__PAYSLIP_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    std::env::var("PAYSLIP_API_BASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__PAYSLIP_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let cfg = resp.json::<RuntimeConfig>().await.ok()?;
    write_window_config(&cfg);
    Some(cfg)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url) {
        log::debug!("API base URL loaded from config.json");
        return cache_base_url(&url);
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("Payslip API base URL: {}", base);
}
