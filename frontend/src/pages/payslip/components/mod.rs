pub mod breakdown;
pub mod document;
pub mod form;
pub mod summary;

pub use breakdown::BreakdownSection;
pub use document::DocumentSection;
pub use form::PayslipForm;
pub use summary::SummarySection;
