use async_trait::async_trait;
use skill_core::{Request, RequestHandler, RequestKind, Response, Result};
use tracing::info;

/// Acknowledges the platform's session-end notification. The platform ignores any speech
/// here, so the response is empty; the reason is logged for diagnostics only.
pub struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn matches(&self, request: &Request) -> bool {
        matches!(request.kind, RequestKind::SessionEnded { .. })
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        if let RequestKind::SessionEnded { reason } = &request.kind {
            info!(
                locale = %request.locale.tag(),
                reason = reason.as_deref().unwrap_or("unspecified"),
                "session ended"
            );
        }
        Ok(Response::empty())
    }
}
