use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::status::ApplicationStatus;
use crate::jobs::JobId;
use crate::search::ParseEnumError;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub u32);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

/// A one-to-five star score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// Clamp `value` into the star range.
    pub const fn saturating(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {value} is outside 1..=5")]
pub struct RatingError {
    pub value: u8,
}

/// Candidate application to a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    /// Weak reference: resolved by lookup and allowed to dangle.
    pub job_id: JobId,
    pub candidate: Candidate,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub notes: Vec<ApplicationNote>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: ApplicationSource,
}

impl Application {
    /// Earliest interview still on the calendar.
    pub fn next_scheduled_interview(&self) -> Option<&Interview> {
        self.interviews
            .iter()
            .filter(|interview| interview.status == InterviewStatus::Scheduled)
            .min_by_key(|interview| interview.scheduled_date)
    }

    /// Mean of the overall ratings across interviews that have feedback.
    pub fn average_feedback(&self) -> Option<f32> {
        let ratings: Vec<u8> = self
            .interviews
            .iter()
            .filter_map(|interview| interview.feedback.as_ref())
            .map(|feedback| feedback.overall_rating.get())
            .collect();

        if ratings.is_empty() {
            return None;
        }
        let total: u32 = ratings.iter().map(|rating| u32::from(*rating)).sum();
        Some(total as f32 / ratings.len() as f32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub experience_years: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f32>,
}

/// Reviewer note attached to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNote {
    pub id: u32,
    pub author: String,
    pub content: String,
    pub created_date: NaiveDate,
    pub is_internal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: InterviewType,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: NonZeroU32,
    pub interviewer: String,
    pub status: InterviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<InterviewFeedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub technical_skills: Rating,
    pub communication: Rating,
    pub cultural_fit: Rating,
    pub overall_rating: Rating,
    pub comments: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Hire,
    NoHire,
    Maybe,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hire => "Hire",
            Self::NoHire => "No Hire",
            Self::Maybe => "Maybe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    PhoneScreening,
    VideoCall,
    Technical,
    Behavioral,
    Final,
    Onsite,
}

impl InterviewType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PhoneScreening,
            Self::VideoCall,
            Self::Technical,
            Self::Behavioral,
            Self::Final,
            Self::Onsite,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhoneScreening => "phone_screening",
            Self::VideoCall => "video_call",
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Final => "final",
            Self::Onsite => "onsite",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PhoneScreening => "Phone Screening",
            Self::VideoCall => "Video Call",
            Self::Technical => "Technical Interview",
            Self::Behavioral => "Behavioral Interview",
            Self::Final => "Final Interview",
            Self::Onsite => "On-site Interview",
        }
    }

    /// Pipeline stage an interview of this kind evidences.
    pub const fn evidences(self) -> ApplicationStatus {
        match self {
            Self::PhoneScreening | Self::VideoCall => ApplicationStatus::PhoneInterview,
            Self::Technical | Self::Behavioral => ApplicationStatus::TechnicalInterview,
            Self::Final | Self::Onsite => ApplicationStatus::FinalInterview,
        }
    }
}

impl FromStr for InterviewType {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|value| value.as_str() == raw)
            .ok_or_else(|| ParseEnumError::new("interview type", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No Show",
        }
    }
}

/// Channel through which the candidate applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSource {
    Direct,
    Linkedin,
    Indeed,
    Glassdoor,
    Referral,
    CompanyWebsite,
}

impl ApplicationSource {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Direct,
            Self::Linkedin,
            Self::Indeed,
            Self::Glassdoor,
            Self::Referral,
            Self::CompanyWebsite,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Linkedin => "linkedin",
            Self::Indeed => "indeed",
            Self::Glassdoor => "glassdoor",
            Self::Referral => "referral",
            Self::CompanyWebsite => "company_website",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Linkedin => "LinkedIn",
            Self::Indeed => "Indeed",
            Self::Glassdoor => "Glassdoor",
            Self::Referral => "Referral",
            Self::CompanyWebsite => "Company Website",
        }
    }
}

impl fmt::Display for ApplicationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationSource {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|value| value.as_str() == raw)
            .ok_or_else(|| ParseEnumError::new("application source", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_bounded() {
        assert_eq!(Rating::new(1).map(Rating::get), Ok(1));
        assert_eq!(Rating::new(5).map(Rating::get), Ok(5));
        assert_eq!(Rating::new(0), Err(RatingError { value: 0 }));
        assert_eq!(Rating::new(6), Err(RatingError { value: 6 }));
        assert!(serde_json::from_str::<Rating>("7").is_err());
        assert_eq!(serde_json::from_str::<Rating>("4").ok(), Rating::new(4).ok());
    }

    #[test]
    fn interview_wire_shape_uses_type_key() {
        let raw = r#"{
            "id": 9,
            "type": "video_call",
            "scheduled_date": "2025-01-15T10:00:00Z",
            "duration_minutes": 45,
            "interviewer": "Jane Smith (HR)",
            "status": "no_show"
        }"#;
        let interview: Interview = serde_json::from_str(raw).expect("interview parses");
        assert_eq!(interview.kind, InterviewType::VideoCall);
        assert_eq!(interview.status, InterviewStatus::NoShow);
        assert_eq!(interview.duration_minutes.get(), 45);
        assert!(interview.feedback.is_none());
    }

    #[test]
    fn zero_length_interviews_are_rejected() {
        let raw = r#"{
            "id": 9,
            "type": "technical",
            "scheduled_date": "2025-01-15T10:00:00Z",
            "duration_minutes": 0,
            "interviewer": "John Doe",
            "status": "scheduled"
        }"#;
        assert!(serde_json::from_str::<Interview>(raw).is_err());
    }

    #[test]
    fn source_spellings_round_trip_through_text() {
        assert_eq!(
            "company_website".parse::<ApplicationSource>(),
            Ok(ApplicationSource::CompanyWebsite)
        );
        assert_eq!(ApplicationSource::Linkedin.label(), "LinkedIn");
        assert!("monster".parse::<ApplicationSource>().is_err());
    }
}
