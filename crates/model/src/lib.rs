//! Data contracts for the clinic assistant.
//!
//! This crate defines the payload shapes exchanged between the intent
//! responder and whatever frontend renders the conversation, so that
//! different frontends (web widget, terminal client) can consume the
//! same engine without depending on it.
//!
//! Types in this crate don't define any behavior beyond constructors
//! and trivial classifiers; the matching logic lives in the core crate.

#![deny(missing_docs)]

mod payload;
mod settings;
mod turn;

pub use payload::*;
pub use settings::*;
pub use turn::*;
