use async_trait::async_trait;
use skill_core::{Request, RequestHandler, RequestKind, Response, Result};

use crate::messages;

/// Greets the user at session start and invites a conversion request.
pub struct LaunchHandler;

#[async_trait]
impl RequestHandler for LaunchHandler {
    fn matches(&self, request: &Request) -> bool {
        matches!(request.kind, RequestKind::Launch)
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        let speech = messages::greeting(request.locale);
        Ok(Response::speak(speech).with_reprompt(speech))
    }
}
