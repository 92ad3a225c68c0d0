use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::{Application, ApplicationId, ApplicationSource, InterviewType};
use super::status::ApplicationStatus;
use crate::jobs::{JobCatalog, JobId};

/// Dashboard row for one application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCardView {
    pub id: ApplicationId,
    pub candidate_name: String,
    pub email: String,
    pub job_id: JobId,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub source: ApplicationSource,
    pub source_label: &'static str,
    pub applied_date: NaiveDate,
    pub tags: Vec<String>,
    pub note_count: usize,
    pub interview_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_interview: Option<UpcomingInterviewView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingInterviewView {
    pub kind: InterviewType,
    pub kind_label: &'static str,
    pub scheduled_date: DateTime<Utc>,
    pub interviewer: String,
}

impl ApplicationCardView {
    pub fn new(application: &Application, jobs: &JobCatalog) -> Self {
        Self {
            id: application.id,
            candidate_name: application.candidate.full_name(),
            email: application.candidate.email.clone(),
            job_id: application.job_id,
            job_title: jobs.job_title_or_placeholder(application.job_id).to_string(),
            status: application.status,
            status_label: application.status.label(),
            rating: application.rating.map(|rating| rating.get()),
            source: application.source,
            source_label: application.source.label(),
            applied_date: application.applied_date,
            tags: application.tags.clone(),
            note_count: application.notes.len(),
            interview_count: application.interviews.len(),
            next_interview: application.next_scheduled_interview().map(|interview| {
                UpcomingInterviewView {
                    kind: interview.kind,
                    kind_label: interview.kind.label(),
                    scheduled_date: interview.scheduled_date,
                    interviewer: interview.interviewer.clone(),
                }
            }),
        }
    }
}

/// Star strip such as `★★★★☆`.
pub fn render_stars(rating: Option<u8>) -> String {
    match rating {
        None => String::new(),
        Some(value) => {
            let filled = usize::from(value.min(5));
            format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        }
    }
}
