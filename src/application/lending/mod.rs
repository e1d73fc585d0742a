mod errors;
mod lending_service;
mod views;

pub use errors::{LendingError, Result};
pub use lending_service::LendingService;
pub use views::{LibrarySnapshot, LoanDetails, LoanView, build_loan_view};
