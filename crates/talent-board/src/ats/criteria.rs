use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::domain::ApplicationSource;
use super::status::ApplicationStatus;
use crate::jobs::JobId;
use crate::search::EnumFilter;

/// Applicant-tracking search criteria.
///
/// Every field defaults to its wildcard. `date_range` is carried for callers that
/// collect it but is not applied by the search engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsFilterCriteria {
    pub status: EnumFilter<ApplicationStatus>,
    #[serde(deserialize_with = "deserialize_job_filter")]
    pub job_id: Option<JobId>,
    pub date_range: DateRange,
    /// Minimum star rating. Unrated applications only pass a zero threshold.
    pub rating_min: u8,
    pub source: EnumFilter<ApplicationSource>,
    /// Matched against candidate first name, last name and email.
    pub search_query: String,
}

/// Inclusive calendar window; an open bound is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub start: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// One edit to the ATS criteria, as produced by the dashboard filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtsFilterUpdate {
    SetStatus(EnumFilter<ApplicationStatus>),
    SetJob(Option<JobId>),
    SetRatingMin(u8),
    SetSource(EnumFilter<ApplicationSource>),
    SetSearchQuery(String),
    SetDateRange(DateRange),
    Clear,
}

impl AtsFilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Merge a single field edit, leaving every other field as it was.
    pub fn apply(self, update: AtsFilterUpdate) -> Self {
        match update {
            AtsFilterUpdate::SetStatus(status) => Self { status, ..self },
            AtsFilterUpdate::SetJob(job_id) => Self { job_id, ..self },
            AtsFilterUpdate::SetRatingMin(rating_min) => Self { rating_min, ..self },
            AtsFilterUpdate::SetSource(source) => Self { source, ..self },
            AtsFilterUpdate::SetSearchQuery(search_query) => Self {
                search_query,
                ..self
            },
            AtsFilterUpdate::SetDateRange(date_range) => Self { date_range, ..self },
            AtsFilterUpdate::Clear => Self::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JobFilterWire {
    Id(u32),
    Text(String),
}

fn deserialize_job_filter<'de, D>(deserializer: D) -> Result<Option<JobId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JobFilterWire>::deserialize(deserializer)? {
        None => Ok(None),
        Some(JobFilterWire::Id(id)) => Ok(Some(JobId(id))),
        Some(JobFilterWire::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(JobFilterWire::Text(raw)) => raw
            .trim()
            .parse::<u32>()
            .map(|id| Some(JobId(id)))
            .map_err(|_| serde::de::Error::custom(format!("'{raw}' is not a job id"))),
    }
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| {
                serde::de::Error::custom(format!(
                    "failed to parse '{value}' as YYYY-MM-DD ({err})"
                ))
            }),
    }
}
