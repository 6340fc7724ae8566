use vetbot_model::{ClinicSettings, Turn};

use crate::conversation::Conversation;
use crate::responder::IntentTable;

/// One chat conversation: an intent table built from a settings
/// snapshot, plus the turn history it produced.
///
/// The session is synchronous and does no I/O. Each submission appends
/// a user turn and exactly one assistant turn; between calls the
/// session is simply waiting for the next input. Frontends that want a
/// "typing" pause add it around these calls.
pub struct ChatSession {
    table: IntentTable,
    conversation: Conversation,
}

impl ChatSession {
    /// Creates a session for the given settings, opening with the
    /// greeting turn.
    pub fn new(settings: &ClinicSettings) -> Self {
        let table = IntentTable::for_settings(settings);
        let mut conversation = Conversation::default();
        conversation.reset_with(table.greeting());
        Self {
            table,
            conversation,
        }
    }

    /// Returns the turns recorded so far, oldest first.
    #[inline]
    pub fn turns(&self) -> &[Turn] {
        self.conversation.turns()
    }

    /// Returns the intent table answering this session.
    #[inline]
    pub fn table(&self) -> &IntentTable {
        &self.table
    }

    /// Submits free user text and returns the assistant's reply turn.
    pub fn submit_text(&mut self, raw: &str) -> &Turn {
        self.conversation.push_user(raw);
        let payload = self.table.match_text(raw);
        self.conversation.push_assistant(payload)
    }

    /// Submits a clicked intent option and returns the reply turn.
    ///
    /// The option's display text is recorded as the user turn, so the
    /// history reads the same as if the user had typed it.
    pub fn select_intent(&mut self, label: &str, intent: &str) -> &Turn {
        self.conversation.push_user(label);
        let payload = self.table.resolve(intent);
        self.conversation.push_assistant(payload)
    }

    /// Clears the history back to a single greeting turn.
    pub fn reset(&mut self) {
        self.conversation.reset_with(self.table.greeting());
    }
}

#[cfg(test)]
mod tests {
    use vetbot_model::{ClinicSettings, ReplyOption, TurnRole};

    use super::ChatSession;
    use crate::responder::intent_keys as keys;

    #[test]
    fn test_session_opens_with_greeting() {
        let session = ChatSession::new(&ClinicSettings::default());
        let turns = session.turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, TurnRole::Assistant);
        assert_eq!(turns[0].text, session.table().greeting().message);
    }

    #[test]
    fn test_submission_appends_one_exchange() {
        let mut session = ChatSession::new(&ClinicSettings::default());
        let reply = session.submit_text("randevu almak istiyorum");
        assert_eq!(reply.role, TurnRole::Assistant);

        let turns = session.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].role, TurnRole::User);
        assert_eq!(turns[1].text, "randevu almak istiyorum");
        assert_eq!(
            turns[2].text,
            session.table().resolve(keys::APPOINTMENT).message
        );
    }

    #[test]
    fn test_selecting_an_option_matches_typing_its_trigger() {
        let mut session = ChatSession::new(&ClinicSettings::default());
        let greeting = session.table().greeting().clone();
        let (label, intent) = greeting
            .options
            .iter()
            .find_map(|option| match option {
                ReplyOption::Invoke { label, intent } => {
                    Some((label.clone(), intent.clone()))
                }
                _ => None,
            })
            .unwrap();

        let from_click = session.select_intent(&label, &intent).text.clone();
        let from_table = session.table().resolve(&intent).message.clone();
        assert_eq!(from_click, from_table);

        // The click is recorded as a user turn with the option label.
        let turns = session.turns();
        assert_eq!(turns[turns.len() - 2].role, TurnRole::User);
        assert_eq!(turns[turns.len() - 2].text, label);
    }

    #[test]
    fn test_reset_returns_to_single_greeting() {
        let mut session = ChatSession::new(&ClinicSettings::default());
        session.submit_text("fiyat");
        session.submit_text("adresiniz nerede");
        assert_eq!(session.turns().len(), 5);

        session.reset();
        let turns = session.turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, session.table().greeting().message);
    }
}
