use serde::{Deserialize, Serialize};

use super::domain::{EmploymentType, ExperienceLevel};
use crate::search::EnumFilter;

/// Job board search criteria. Empty text and `false` are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilterCriteria {
    /// Matched against title, company name and description.
    pub query: String,
    pub location: String,
    pub employment_type: EnumFilter<EmploymentType>,
    pub experience_level: EnumFilter<ExperienceLevel>,
    /// When set, only remote-friendly postings match.
    pub remote_option: bool,
}

/// One edit to the job criteria, as produced by a search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilterUpdate {
    SetQuery(String),
    SetLocation(String),
    SetEmploymentType(EnumFilter<EmploymentType>),
    SetExperienceLevel(EnumFilter<ExperienceLevel>),
    SetRemoteOnly(bool),
    Clear,
}

impl JobFilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Merge a single field edit, leaving every other field as it was.
    pub fn apply(self, update: JobFilterUpdate) -> Self {
        match update {
            JobFilterUpdate::SetQuery(query) => Self { query, ..self },
            JobFilterUpdate::SetLocation(location) => Self { location, ..self },
            JobFilterUpdate::SetEmploymentType(employment_type) => Self {
                employment_type,
                ..self
            },
            JobFilterUpdate::SetExperienceLevel(experience_level) => Self {
                experience_level,
                ..self
            },
            JobFilterUpdate::SetRemoteOnly(remote_option) => Self {
                remote_option,
                ..self
            },
            JobFilterUpdate::Clear => Self::default(),
        }
    }
}
