//! Core types: locale, request, slot, response, and the handler traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SkillError};

/// Locale of the interaction. Only the two locales the skill ships messages for;
/// anything else falls back to [`Locale::EnUs`] via [`Locale::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    EsMx,
    #[default]
    EnUs,
}

impl Locale {
    /// Maps a BCP-47 locale tag to a [`Locale`]. Unrecognized tags fall back to `EnUs`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "es-MX" => Locale::EsMx,
            _ => Locale::EnUs,
        }
    }

    /// The wire tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EsMx => "es-MX",
            Locale::EnUs => "en-US",
        }
    }
}

/// A single intent slot as delivered by the platform. A slot may be present in the
/// request but carry no resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Slot {
    pub value: Option<String>,
}

impl Slot {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// One incoming request: the locale it was spoken in plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub locale: Locale,
    pub kind: RequestKind,
}

/// The closed set of request shapes the dispatcher routes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Session start with no intent yet.
    Launch,
    /// A classified intent with its extracted slots.
    Intent {
        name: String,
        slots: HashMap<String, Slot>,
    },
    /// Platform notification that the session is over.
    SessionEnded { reason: Option<String> },
    /// A request that could not be read or classified; routed to the error responder.
    UnknownError { detail: String },
}

impl RequestKind {
    /// The platform-facing name of this request kind, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::Launch => "LaunchRequest",
            RequestKind::Intent { .. } => "IntentRequest",
            RequestKind::SessionEnded { .. } => "SessionEndedRequest",
            RequestKind::UnknownError { .. } => "UnknownError",
        }
    }
}

impl Request {
    pub fn launch(locale: Locale) -> Self {
        Self {
            locale,
            kind: RequestKind::Launch,
        }
    }

    pub fn intent(locale: Locale, name: impl Into<String>, slots: HashMap<String, Slot>) -> Self {
        Self {
            locale,
            kind: RequestKind::Intent {
                name: name.into(),
                slots,
            },
        }
    }

    pub fn session_ended(locale: Locale, reason: Option<String>) -> Self {
        Self {
            locale,
            kind: RequestKind::SessionEnded { reason },
        }
    }

    pub fn unknown_error(locale: Locale, detail: impl Into<String>) -> Self {
        Self {
            locale,
            kind: RequestKind::UnknownError {
                detail: detail.into(),
            },
        }
    }

    /// The intent name, if this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The resolved value of a slot. `None` if this is not an intent request,
    /// the slot is absent, or the slot carries no value.
    pub fn slot_value(&self, slot_name: &str) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { slots, .. } => {
                slots.get(slot_name).and_then(|slot| slot.value.as_deref())
            }
            _ => None,
        }
    }
}

/// What the skill says back: speech, an optional reprompt (asks the user to respond
/// again), and whether the session ends with this response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}

impl Response {
    /// A spoken response; session stays open, no reprompt.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: None,
            should_end_session: false,
        }
    }

    /// A silent acknowledgment that ends the session (e.g. for session-end notifications).
    pub fn empty() -> Self {
        Self {
            speech: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn ending_session(mut self) -> Self {
        self.should_end_session = true;
        self
    }
}

/// One routable handler: a predicate over the request plus an action producing a response.
/// The dispatcher calls `matches` in registration order and runs the first handler that
/// returns true; `respond` may fail, in which case the dispatcher falls back to the
/// [`ErrorResponder`].
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Whether this handler wants the request.
    fn matches(&self, request: &Request) -> bool;
    /// Produces the response for a matched request.
    async fn respond(&self, request: &Request) -> Result<Response>;
}

/// The dispatcher's last line of defense: turns any failure into a spoken response.
/// Infallible so the dispatch cycle always produces exactly one response.
#[async_trait]
pub trait ErrorResponder: Send + Sync {
    async fn respond_to_error(&self, request: &Request, error: &SkillError) -> Response;
}
