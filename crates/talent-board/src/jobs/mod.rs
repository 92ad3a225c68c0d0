//! Job board: company and posting records plus the job search engine.

mod catalog;
mod criteria;
pub mod domain;
mod query;
pub mod views;

pub use catalog::{JobCatalog, UNKNOWN_POSITION};
pub use criteria::{JobFilterCriteria, JobFilterUpdate};
pub use domain::{Company, CompanyId, EmploymentType, ExperienceLevel, Job, JobId};
pub use query::search;
pub use views::{posted_label, CompanyProfileView, JobCardView};
