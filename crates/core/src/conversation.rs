//! Conversation-related types.

use vetbot_model::{ResponsePayload, Turn};

/// The turn history of one conversation.
///
/// Turns only ever get appended; the single destructive operation is a
/// reset back to the greeting.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Returns the turns recorded so far, oldest first.
    #[inline]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub(crate) fn push_user<S: Into<String>>(&mut self, text: S) {
        self.turns.push(Turn::user(text));
    }

    /// Records an assistant reply and returns the stored turn.
    pub(crate) fn push_assistant(&mut self, payload: &ResponsePayload) -> &Turn {
        self.turns.push(Turn::assistant(payload));
        self.turns
            .last()
            .expect("a turn was just pushed")
    }

    /// Drops all history and re-seeds with the greeting reply.
    pub(crate) fn reset_with(&mut self, greeting: &ResponsePayload) {
        self.turns.clear();
        self.turns.push(Turn::assistant(greeting));
    }
}
