//! Core logic of the clinic assistant: the intent responder and the
//! conversation state it feeds.
//!
//! The responder itself is a pure function of its input. A conversation
//! is built once from a [`ClinicSettings`](vetbot_model::ClinicSettings)
//! snapshot and answers every turn from the same immutable intent table.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod conversation;
mod responder;
mod session;

pub use responder::{IntentTable, intent_keys};
pub use session::ChatSession;
