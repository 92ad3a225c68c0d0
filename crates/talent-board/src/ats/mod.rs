//! Applicant tracking: applications, candidates, interviews and the ATS search engine.

mod catalog;
mod commands;
mod criteria;
pub mod domain;
pub mod export;
mod query;
pub mod stats;
pub mod status;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::AtsCatalog;
pub use commands::{ApplicationCommand, CommandError, InterviewRequest, NoteDraft};
pub use criteria::{AtsFilterCriteria, AtsFilterUpdate, DateRange};
pub use domain::{
    Application, ApplicationId, ApplicationNote, ApplicationSource, Candidate, CandidateId,
    Education, Interview, InterviewFeedback, InterviewStatus, InterviewType, Rating, RatingError,
    Recommendation,
};
pub use query::search;
pub use stats::{AtsStats, ConversionRates, SourceShare, StatusShare};
pub use status::{ApplicationStatus, TransitionError};
pub use views::{render_stars, ApplicationCardView};
