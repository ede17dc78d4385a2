//! The skill facade: production handler order and the JSON entry point.

use request_dispatch::Dispatcher;
use skill_core::{Request, Response};
use skill_handlers::{
    ApologyHandler, CancelOrStopHandler, ConvertTemperatureHandler, FallbackHandler,
    HelpHandler, IntentReflectorHandler, LaunchHandler, SessionEndedHandler,
};
use std::sync::Arc;
use tracing::warn;

use crate::envelope::{RequestEnvelope, ResponseEnvelope};

/// The assembled degree-converter skill. Stateless across invocations; build once and
/// dispatch any number of independent requests.
pub struct Skill {
    dispatcher: Dispatcher,
}

impl Skill {
    /// Builds the dispatcher with the production handler order. The reflector sits after
    /// every modeled intent so it only catches what nothing else claimed; the apology
    /// responder answers unmatched requests and handler failures.
    pub fn new() -> Self {
        let dispatcher = Dispatcher::new(Arc::new(ApologyHandler))
            .add_handler(Arc::new(LaunchHandler))
            .add_handler(Arc::new(ConvertTemperatureHandler))
            .add_handler(Arc::new(HelpHandler))
            .add_handler(Arc::new(CancelOrStopHandler))
            .add_handler(Arc::new(FallbackHandler))
            .add_handler(Arc::new(SessionEndedHandler))
            .add_handler(Arc::new(IntentReflectorHandler));
        Self { dispatcher }
    }

    /// Dispatches one decoded envelope to one response envelope.
    pub async fn handle(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let request = Request::from(envelope);
        ResponseEnvelope::from(self.dispatcher.dispatch(&request).await)
    }

    /// JSON in, JSON out. A payload that does not deserialize becomes an
    /// `UnknownError` request, so even garbage input is answered with the apology
    /// (in en-US, since no locale could be read).
    pub async fn handle_json(&self, payload: &str) -> anyhow::Result<String> {
        let request = match serde_json::from_str::<RequestEnvelope>(payload) {
            Ok(envelope) => Request::from(envelope),
            Err(err) => {
                warn!(error = %err, "request envelope could not be read");
                Request::unknown_error(Default::default(), err.to_string())
            }
        };
        let response: Response = self.dispatcher.dispatch(&request).await;
        let envelope = ResponseEnvelope::from(response);
        Ok(serde_json::to_string(&envelope)?)
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new()
    }
}
