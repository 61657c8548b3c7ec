pub mod payslip;

pub use payslip::PayslipPage;
