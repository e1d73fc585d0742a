pub mod book;
pub mod errors;
pub mod loan;
pub mod member;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use loan::{LOAN_PERIOD_DAYS, Loan, LoanStatus};
pub use member::Member;
pub use value_objects::*;
