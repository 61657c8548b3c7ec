pub mod download;
pub mod storage;
pub mod time;

pub use download::{BrowserDocumentHost, DocumentHost, DownloadError};
