use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::{ReplyOption, ResponsePayload};

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// Something the user typed or clicked.
    User,
    /// A reply from the responder.
    Assistant,
}

/// One entry in a conversation's history.
///
/// Turns are immutable once created; a conversation only ever appends
/// them, or drops the whole list back to its greeting on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who produced this turn.
    pub role: TurnRole,
    /// Primary text.
    pub text: String,
    /// Secondary text, assistant turns only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Follow-up options attached to the turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ReplyOption>,
    /// Whether the turn should be styled as an emergency notice.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub urgent: bool,
    /// Creation time.
    pub at: DateTime<Utc>,
}

impl Turn {
    /// Creates a user turn with the given text.
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            detail: None,
            options: vec![],
            urgent: false,
            at: Utc::now(),
        }
    }

    /// Creates an assistant turn carrying the given payload.
    pub fn assistant(payload: &ResponsePayload) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: payload.message.clone(),
            detail: payload.detail.clone(),
            options: payload.options.clone(),
            urgent: payload.urgent,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_turn_carries_payload() {
        let payload = ResponsePayload::with_message("Acil durum hattımız açık.")
            .with_detail("7/24 hizmet veriyoruz.")
            .with_options([ReplyOption::navigate(
                "Hemen Ara",
                "tel:+902125554433",
            )])
            .with_urgency();

        let turn = Turn::assistant(&payload);
        assert_eq!(turn.role, TurnRole::Assistant);
        assert_eq!(turn.text, payload.message);
        assert_eq!(turn.detail, payload.detail);
        assert_eq!(turn.options, payload.options);
        assert!(turn.urgent);
    }
}
