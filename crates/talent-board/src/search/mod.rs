//! Predicate compiler and query executor shared by the job and ATS engines.

mod executor;
mod filter;
mod predicate;

pub use executor::{execute, search, select, Criteria};
pub use filter::{EnumFilter, Needle, ParseEnumError};
pub use predicate::Predicate;
