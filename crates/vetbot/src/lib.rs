//! Embedding facade for the clinic assistant.
//!
//! Re-exports the pieces a frontend needs to run a conversation, plus
//! the settings-file loading used by the bundled terminal client.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod settings;

pub use settings::{
    SETTINGS_ENV_VAR, SettingsError, settings_from_env, settings_from_path,
};
pub use vetbot_core::{ChatSession, IntentTable, intent_keys};
pub use vetbot_model::{
    ClinicSettings, DestinationKind, ReplyOption, ResponsePayload, Turn,
    TurnRole,
};
