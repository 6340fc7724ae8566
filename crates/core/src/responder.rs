//! The intent responder: a deterministic keyword matcher over a fixed,
//! ordered table of canned replies.

mod catalog;

use vetbot_model::{ClinicSettings, ResponsePayload};

/// Well-known intent keys.
///
/// These are the keys embedded in [`ReplyOption::Invoke`] options, so
/// frontends can also use them to jump straight to an intent.
///
/// [`ReplyOption::Invoke`]: vetbot_model::ReplyOption::Invoke
pub mod intent_keys {
    /// Emergency guidance. Declared first in the table so that text
    /// containing an emergency word always resolves here, whatever
    /// else it mentions.
    pub const EMERGENCY: &str = "emergency";
    /// The greeting a conversation opens with.
    pub const GREETING: &str = "greeting";
    /// Appointment booking.
    pub const APPOINTMENT: &str = "appointment";
    /// Pricing questions.
    pub const PRICING: &str = "pricing";
    /// Vaccination program.
    pub const VACCINATION: &str = "vaccination";
    /// Dental care.
    pub const DENTAL: &str = "dental";
    /// Grooming services.
    pub const GROOMING: &str = "grooming";
    /// Surgical operations.
    pub const SURGERY: &str = "surgery";
    /// Overview of the clinic's services.
    pub const SERVICES: &str = "services";
    /// Opening hours.
    pub const HOURS: &str = "hours";
    /// Address and directions.
    pub const LOCATION: &str = "location";
    /// Contact channels.
    pub const CONTACT: &str = "contact";
    /// Thanks/goodbye pleasantries.
    pub const THANKS: &str = "thanks";
    /// The reserved no-match entry. It has no trigger phrases and is
    /// returned whenever nothing else applies.
    pub const FALLBACK: &str = "fallback";
}

const FALLBACK_PHONE_DISPLAY: &str = "(0212) 555 44 33";
const FALLBACK_PHONE_DIAL: &str = "+902125554433";
const FALLBACK_WHATSAPP: &str = "+90 532 555 44 33";
const FALLBACK_EMAIL: &str = "info@pativeteriner.com";

/// Contact values with every unset field replaced by its fallback
/// literal, ready to be embedded in reply copy.
pub(crate) struct ResolvedContact {
    pub(crate) phone_display: String,
    pub(crate) phone_dial: String,
    pub(crate) whatsapp_digits: String,
    pub(crate) email: String,
}

impl ResolvedContact {
    fn from_settings(settings: &ClinicSettings) -> Self {
        let whatsapp =
            settings.whatsapp.as_deref().unwrap_or(FALLBACK_WHATSAPP);
        Self {
            phone_display: settings
                .phone_display
                .as_deref()
                .unwrap_or(FALLBACK_PHONE_DISPLAY)
                .to_owned(),
            phone_dial: settings
                .phone_dial
                .as_deref()
                .unwrap_or(FALLBACK_PHONE_DIAL)
                .to_owned(),
            // wa.me only accepts the bare digits of the number.
            whatsapp_digits: whatsapp
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            email: settings
                .email
                .as_deref()
                .unwrap_or(FALLBACK_EMAIL)
                .to_owned(),
        }
    }

    pub(crate) fn tel_link(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }

    pub(crate) fn wa_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_digits)
    }

    pub(crate) fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// One row of the intent table.
pub(crate) struct IntentEntry {
    pub(crate) key: &'static str,
    /// Lowercase substrings that select this entry. Matching is plain
    /// containment over the normalized input, with no word-boundary
    /// check: a trigger inside a longer word still matches.
    pub(crate) triggers: &'static [&'static str],
    pub(crate) payload: ResponsePayload,
}

/// An immutable, ordered table mapping user input to reply payloads.
///
/// The table is built once per conversation from a settings snapshot
/// and holds fully-resolved reply copy; nothing is substituted at match
/// time. Declaration order doubles as matching priority, so the table
/// is a sequence, not an associative container.
///
/// All lookup methods are total: an unknown key or unmatched text
/// yields the reserved fallback payload, never an error.
pub struct IntentTable {
    entries: Vec<IntentEntry>,
}

impl IntentTable {
    /// Builds the table for the given settings.
    ///
    /// Unset settings fields resolve to the clinic's default contact
    /// literals, so this never fails.
    pub fn for_settings(settings: &ClinicSettings) -> Self {
        let contact = ResolvedContact::from_settings(settings);
        Self {
            entries: catalog::entries(&contact),
        }
    }

    /// Returns the payload registered under `key`, or the fallback
    /// payload if the key is unknown.
    pub fn resolve(&self, key: &str) -> &ResponsePayload {
        match self.entries.iter().find(|entry| entry.key == key) {
            Some(entry) => {
                debug!(intent = entry.key, "resolved intent key");
                &entry.payload
            }
            None => {
                warn!(intent = key, "unknown intent key, using fallback");
                self.fallback()
            }
        }
    }

    /// Matches free user text against the table.
    ///
    /// The text is trimmed and lowercased, then tested against each
    /// entry's triggers in declaration order; the first entry with any
    /// trigger contained in the text wins. Text that matches nothing
    /// (including the empty string) yields the fallback payload.
    pub fn match_text(&self, raw: &str) -> &ResponsePayload {
        let normalized = raw.trim().to_lowercase();
        for entry in &self.entries {
            if entry.key == intent_keys::FALLBACK {
                continue;
            }
            if entry
                .triggers
                .iter()
                .any(|trigger| normalized.contains(trigger))
            {
                debug!(intent = entry.key, "matched user text");
                return &entry.payload;
            }
        }
        debug!("no intent matched, using fallback");
        self.fallback()
    }

    /// Returns the payload a conversation opens with.
    #[inline]
    pub fn greeting(&self) -> &ResponsePayload {
        self.resolve(intent_keys::GREETING)
    }

    fn fallback(&self) -> &ResponsePayload {
        self.entries
            .iter()
            .find(|entry| entry.key == intent_keys::FALLBACK)
            .map(|entry| &entry.payload)
            .expect("the catalog always contains the fallback entry")
    }
}
