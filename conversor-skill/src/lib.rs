//! # conversor-skill
//!
//! The assembled degree-converter skill: wire envelopes for the voice platform's JSON
//! request/response shapes plus the [`Skill`] facade wiring the production handler order
//! into a [`request_dispatch::Dispatcher`]. Handles only envelope conversion and dispatch;
//! the platform owns session lifecycle, speech-to-text, and intent classification.

mod envelope;
mod skill;

pub use envelope::{IntentEnvelope, RequestEnvelope, ResponseEnvelope, SlotEnvelope};
pub use skill::Skill;
