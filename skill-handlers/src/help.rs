use async_trait::async_trait;
use skill_core::{Request, RequestHandler, Response, Result};

use crate::messages;

/// Answers the built-in `AMAZON.HelpIntent` with a localized usage hint.
pub struct HelpHandler;

#[async_trait]
impl RequestHandler for HelpHandler {
    fn matches(&self, request: &Request) -> bool {
        request.intent_name() == Some("AMAZON.HelpIntent")
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        let speech = messages::help(request.locale);
        Ok(Response::speak(speech).with_reprompt(speech))
    }
}
