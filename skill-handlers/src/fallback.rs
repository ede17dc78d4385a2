use async_trait::async_trait;
use skill_core::{Request, RequestHandler, Response, Result};

use crate::messages;

/// Answers `AMAZON.FallbackIntent`: the platform understood the utterance was for this
/// skill but matched no modeled intent.
pub struct FallbackHandler;

#[async_trait]
impl RequestHandler for FallbackHandler {
    fn matches(&self, request: &Request) -> bool {
        request.intent_name() == Some("AMAZON.FallbackIntent")
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        let speech = messages::fallback(request.locale);
        Ok(Response::speak(speech).with_reprompt(speech))
    }
}
