//! # skill-core
//!
//! Core types and traits for the voice skill: [`Request`], [`Response`], [`Locale`],
//! the [`RequestHandler`] and [`ErrorResponder`] traits, the error taxonomy, and
//! tracing initialization. Platform-agnostic; used by request-dispatch, skill-handlers
//! and the conversor-skill wire layer.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{Result, SkillError};
pub use logger::init_tracing;
pub use types::{ErrorResponder, Locale, Request, RequestHandler, RequestKind, Response, Slot};
