use async_trait::async_trait;
use skill_core::{ErrorResponder, Request, Response, SkillError};
use tracing::error;

use crate::messages;

/// The skill's sole failure-recovery mechanism: logs the error and apologizes in the
/// request's locale. Used by the dispatcher for unmatched requests and failed handlers.
pub struct ApologyHandler;

#[async_trait]
impl ErrorResponder for ApologyHandler {
    async fn respond_to_error(&self, request: &Request, error: &SkillError) -> Response {
        error!(
            request_kind = %request.kind.name(),
            locale = %request.locale.tag(),
            error = %error,
            "request failed, answering with apology"
        );
        let speech = messages::apology(request.locale);
        Response::speak(speech).with_reprompt(speech)
    }
}
