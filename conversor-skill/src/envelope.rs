//! Wire envelopes: serde models of the platform's JSON request and response shapes,
//! and conversions to and from the core types.

use serde::{Deserialize, Serialize};
use skill_core::{Locale, Request, Response, Slot};
use std::collections::HashMap;

/// Inbound request envelope, discriminated by the platform's `type` field. The locale
/// tag is optional on the wire; missing or unrecognized tags fall back to en-US.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RequestEnvelope {
    #[serde(rename = "LaunchRequest")]
    Launch { locale: Option<String> },
    #[serde(rename = "IntentRequest")]
    Intent {
        locale: Option<String>,
        intent: IntentEnvelope,
    },
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {
        locale: Option<String>,
        reason: Option<String>,
    },
}

/// The intent payload of an `IntentRequest`: name plus slot name → `{ "value": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentEnvelope {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotEnvelope>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotEnvelope {
    pub value: Option<String>,
}

fn locale_from(tag: Option<&str>) -> Locale {
    tag.map(Locale::from_tag).unwrap_or_default()
}

impl From<RequestEnvelope> for Request {
    fn from(envelope: RequestEnvelope) -> Self {
        match envelope {
            RequestEnvelope::Launch { locale } => Request::launch(locale_from(locale.as_deref())),
            RequestEnvelope::Intent { locale, intent } => {
                let slots = intent
                    .slots
                    .into_iter()
                    .map(|(name, slot)| (name, Slot { value: slot.value }))
                    .collect();
                Request::intent(locale_from(locale.as_deref()), intent.name, slots)
            }
            RequestEnvelope::SessionEnded { locale, reason } => {
                Request::session_ended(locale_from(locale.as_deref()), reason)
            }
        }
    }
}

/// Outbound response envelope: `{ "speech"?, "repromptSpeech"?, "shouldEndSession" }`.
/// Absent optionals are omitted, matching the platform contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt_speech: Option<String>,
    pub should_end_session: bool,
}

impl From<Response> for ResponseEnvelope {
    fn from(response: Response) -> Self {
        Self {
            speech: response.speech,
            reprompt_speech: response.reprompt,
            should_end_session: response.should_end_session,
        }
    }
}
