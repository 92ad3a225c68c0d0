use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::ParseEnumError;

/// Hiring pipeline state of an application.
///
/// `Applied` is the only initial state; `Hired`, `Rejected` and `Withdrawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    PhoneInterview,
    TechnicalInterview,
    FinalInterview,
    OfferExtended,
    Hired,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Applied,
            Self::Screening,
            Self::PhoneInterview,
            Self::TechnicalInterview,
            Self::FinalInterview,
            Self::OfferExtended,
            Self::Hired,
            Self::Rejected,
            Self::Withdrawn,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::PhoneInterview => "phone_interview",
            Self::TechnicalInterview => "technical_interview",
            Self::FinalInterview => "final_interview",
            Self::OfferExtended => "offer_extended",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::PhoneInterview => "Phone Interview",
            Self::TechnicalInterview => "Technical Interview",
            Self::FinalInterview => "Final Interview",
            Self::OfferExtended => "Offer Extended",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected | Self::Withdrawn)
    }

    /// Position along the forward pipeline; `None` for the exit states.
    pub const fn stage(self) -> Option<u8> {
        match self {
            Self::Applied => Some(0),
            Self::Screening => Some(1),
            Self::PhoneInterview => Some(2),
            Self::TechnicalInterview => Some(3),
            Self::FinalInterview => Some(4),
            Self::OfferExtended => Some(5),
            Self::Hired => Some(6),
            Self::Rejected | Self::Withdrawn => None,
        }
    }

    /// Validate a move to `next`.
    ///
    /// Forward moves may skip stages. `Rejected` and `Withdrawn` are reachable from
    /// every non-terminal state. Nothing leaves a terminal state.
    pub fn transition(self, next: Self) -> Result<Self, TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::FromTerminal { from: self });
        }

        match (self.stage(), next.stage()) {
            (_, None) => Ok(next),
            (Some(from), Some(to)) if to > from => Ok(next),
            _ => Err(TransitionError::NotForward { from: self, to: next }),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|value| value.as_str() == raw)
            .ok_or_else(|| ParseEnumError::new("application status", raw))
    }
}

/// Rejected pipeline move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("application is already {} and cannot change status", .from.label())]
    FromTerminal { from: ApplicationStatus },
    #[error("cannot move application from {} back to {}", .from.label(), .to.label())]
    NotForward {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}
