use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::AtsCatalog;
use super::domain::{
    ApplicationId, ApplicationNote, Interview, InterviewStatus, InterviewType, Rating, RatingError,
};
use super::status::{ApplicationStatus, TransitionError};

/// Reviewer note as typed into the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub author: String,
    pub content: String,
    #[serde(default = "internal_by_default")]
    pub is_internal: bool,
}

fn internal_by_default() -> bool {
    true
}

/// Interview booking as captured by the scheduler form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub kind: InterviewType,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub interviewer: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Edits a reviewer can make to one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationCommand {
    AddNote(NoteDraft),
    ScheduleInterview(InterviewRequest),
    ChangeStatus(ApplicationStatus),
    Rate(u8),
}

impl ApplicationCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddNote(_) => "add_note",
            Self::ScheduleInterview(_) => "schedule_interview",
            Self::ChangeStatus(_) => "change_status",
            Self::Rate(_) => "rate",
        }
    }
}

/// Why a command could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error("note content must not be blank")]
    EmptyNote,
    #[error("note author must not be blank")]
    MissingAuthor,
    #[error("invalid interview: {reason}")]
    InvalidInterview { reason: &'static str },
    #[error("application {id} is {} and no longer accepts interviews", .status.label())]
    ClosedApplication {
        id: ApplicationId,
        status: ApplicationStatus,
    },
    #[error("no {kind} ids left to assign")]
    IdSpaceExhausted { kind: &'static str },
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Rating(#[from] RatingError),
}

impl AtsCatalog {
    /// Apply `command` to one application, producing a new snapshot.
    ///
    /// `self` is left untouched. The edited application's `last_updated` becomes `today`.
    pub fn apply(
        &self,
        id: ApplicationId,
        command: ApplicationCommand,
        today: NaiveDate,
    ) -> Result<AtsCatalog, CommandError> {
        let current = self
            .application(id)
            .ok_or(CommandError::ApplicationNotFound(id))?;
        let mut updated = current.clone();
        let name = command.name();

        match command {
            ApplicationCommand::AddNote(draft) => {
                let note = self.note_from_draft(draft, today)?;
                updated.notes.push(note);
            }
            ApplicationCommand::ScheduleInterview(request) => {
                if updated.status.is_terminal() {
                    return Err(CommandError::ClosedApplication {
                        id,
                        status: updated.status,
                    });
                }
                let interview = self.interview_from_request(request)?;
                updated.interviews.push(interview);
            }
            ApplicationCommand::ChangeStatus(next) => {
                updated.status = updated.status.transition(next)?;
            }
            ApplicationCommand::Rate(value) => {
                updated.rating = Some(Rating::new(value)?);
            }
        }

        updated.last_updated = today;
        info!(application_id = id.0, command = name, "application command applied");
        Ok(self.replace(updated))
    }

    fn note_from_draft(
        &self,
        draft: NoteDraft,
        today: NaiveDate,
    ) -> Result<ApplicationNote, CommandError> {
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(CommandError::EmptyNote);
        }
        let author = draft.author.trim();
        if author.is_empty() {
            return Err(CommandError::MissingAuthor);
        }

        let id = next_id(
            "note",
            self.applications()
                .iter()
                .flat_map(|application| application.notes.iter().map(|note| note.id)),
        )?;

        Ok(ApplicationNote {
            id,
            author: author.to_string(),
            content: content.to_string(),
            created_date: today,
            is_internal: draft.is_internal,
        })
    }

    fn interview_from_request(&self, request: InterviewRequest) -> Result<Interview, CommandError> {
        let duration_minutes =
            NonZeroU32::new(request.duration_minutes).ok_or(CommandError::InvalidInterview {
                reason: "duration must be at least one minute",
            })?;
        let interviewer = request.interviewer.trim();
        if interviewer.is_empty() {
            return Err(CommandError::InvalidInterview {
                reason: "interviewer is required",
            });
        }

        let id = next_id(
            "interview",
            self.applications()
                .iter()
                .flat_map(|application| application.interviews.iter().map(|interview| interview.id)),
        )?;

        Ok(Interview {
            id,
            kind: request.kind,
            scheduled_date: request.scheduled_date,
            duration_minutes,
            interviewer: interviewer.to_string(),
            status: InterviewStatus::Scheduled,
            location: non_blank(request.location),
            meeting_link: non_blank(request.meeting_link),
            notes: non_blank(request.notes),
            feedback: None,
        })
    }
}

/// Ids are catalog-wide and one past the highest in use.
fn next_id(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<u32, CommandError> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(CommandError::IdSpaceExhausted { kind })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
