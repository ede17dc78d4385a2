use async_trait::async_trait;
use skill_core::{Request, RequestHandler, Response, Result};

use crate::messages;

/// Answers `AMAZON.CancelIntent` and `AMAZON.StopIntent` with a farewell and ends the session.
pub struct CancelOrStopHandler;

#[async_trait]
impl RequestHandler for CancelOrStopHandler {
    fn matches(&self, request: &Request) -> bool {
        matches!(
            request.intent_name(),
            Some("AMAZON.CancelIntent") | Some("AMAZON.StopIntent")
        )
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        Ok(Response::speak(messages::goodbye(request.locale)).ending_session())
    }
}
