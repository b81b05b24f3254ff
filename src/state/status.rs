//! Approval state for records that HR can approve or reject.
//!
//! `Pending` is the only state with outgoing transitions; `Approved` and
//! `Rejected` are terminal. The server decides for real; this model only
//! drives which badge and buttons a row shows.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::Advance;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// An HR decision on a pending record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("record already decided: {0:?}")]
    AlreadyDecided(ActionStatus),
}

/// Visual tone of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "badge bg-success",
            Self::Warning => "badge bg-warning",
            Self::Danger => "badge bg-danger",
            Self::Secondary => "badge bg-secondary",
        }
    }
}

impl ActionStatus {
    /// Parse a wire status label. The back-end mixes cases and genders
    /// (`PENDIENTE`, `Aprobado`, `Aprobada`, `Completado`, ...).
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Some(Self::Pending),
            "aprobado" | "aprobada" | "completado" | "completada" | "approved" => Some(Self::Approved),
            "rechazado" | "rechazada" | "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Advances carry flags instead of a label; a rejection wins over a
    /// stale approval flag.
    pub fn of_advance(advance: &Advance) -> Self {
        if advance.rejected {
            Self::Rejected
        } else if advance.approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Apply a decision.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyDecided`] from a terminal state.
    pub fn apply(self, decision: Decision) -> Result<Self, TransitionError> {
        match (self, decision) {
            (Self::Pending, Decision::Approve) => Ok(Self::Approved),
            (Self::Pending, Decision::Reject) => Ok(Self::Rejected),
            (decided, _) => Err(TransitionError::AlreadyDecided(decided)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobado",
            Self::Rejected => "Rechazado",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Approved => BadgeTone::Success,
            Self::Rejected => BadgeTone::Danger,
        }
    }
}

impl Decision {
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Aprobar",
            Self::Reject => "Rechazar",
        }
    }

    /// Past participle used in confirmations ("Anticipo aprobado").
    pub fn outcome(self) -> &'static str {
        match self {
            Self::Approve => "aprobado",
            Self::Reject => "rechazado",
        }
    }
}

/// Tone for a free-form status label, e.g. leave requests whose status is
/// display-only. Unknown labels read as pending.
pub fn tone_for_label(label: &str) -> BadgeTone {
    ActionStatus::parse(label).map_or(BadgeTone::Warning, ActionStatus::tone)
}
