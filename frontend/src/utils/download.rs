use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::utils::storage as storage_utils;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Delay between the download click and revoking the object URL behind it.
pub const REVOKE_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownloadError {
    #[error("{0}")]
    Unavailable(String),
    #[error("Failed to create blob")]
    Blob,
    #[error("Failed to create object URL")]
    ObjectUrl,
    #[error("Failed to prepare download link: {0}")]
    Link(&'static str),
}

/// Host capabilities for fetched binary documents. The payslip page only
/// decides whether and under which name a document is saved; the host
/// decides how.
pub trait DocumentHost {
    /// Wraps `bytes` into an in-memory document and returns a temporary
    /// access handle (an object URL in the browser).
    fn create_handle(&self, bytes: &[u8], mime_type: &str) -> Result<String, DownloadError>;

    fn release_handle(&self, handle: &str);

    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError>;

    /// Opens the handle in a new viewing context and prints it once loaded.
    /// Blocked pop-ups are ignored.
    fn print(&self, handle: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocumentHost;

pub fn mime_type_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        PDF_MIME_TYPE
    } else {
        "application/octet-stream"
    }
}

fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, DownloadError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| DownloadError::Blob)
}

fn browser_window() -> Result<web_sys::Window, DownloadError> {
    storage_utils::window().map_err(DownloadError::Unavailable)
}

impl DocumentHost for BrowserDocumentHost {
    fn create_handle(&self, bytes: &[u8], mime_type: &str) -> Result<String, DownloadError> {
        browser_window()?;
        let blob = bytes_to_blob(bytes, mime_type)?;
        Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::ObjectUrl)
    }

    fn release_handle(&self, handle: &str) {
        if browser_window().is_err() {
            return;
        }
        let _ = Url::revoke_object_url(handle);
    }

    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
        let document = browser_window()?
            .document()
            .ok_or_else(|| DownloadError::Unavailable("No document".into()))?;
        let blob = bytes_to_blob(bytes, mime_type_for(file_name))?;
        let url = Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::ObjectUrl)?;

        let anchor = document
            .create_element("a")
            .map_err(|_| DownloadError::Link("create"))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| DownloadError::Link("cast"))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();
        document
            .body()
            .ok_or(DownloadError::Link("no body"))?
            .append_child(&anchor)
            .map_err(|_| DownloadError::Link("append"))?;
        anchor.click();

        Timeout::new(REVOKE_DELAY_MS, move || {
            anchor.remove();
            let _ = Url::revoke_object_url(&url);
        })
        .forget();
        log::debug!("Saved {} ({} bytes)", file_name, bytes.len());
        Ok(())
    }

    fn print(&self, handle: &str) {
        let Ok(window) = browser_window() else {
            return;
        };
        let Ok(Some(print_window)) = window.open_with_url_and_target(handle, "_blank") else {
            log::debug!("Print window was blocked");
            return;
        };
        let target = print_window.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            let _ = target.print();
        });
        print_window.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();
    }
}
