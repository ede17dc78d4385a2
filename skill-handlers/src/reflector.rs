use async_trait::async_trait;
use skill_core::{Request, RequestHandler, RequestKind, Response, Result};

/// Catch-all for intents no earlier handler claimed: echoes the intent name back as
/// diagnostic speech. Deliberately not localized; registered last among the intent
/// handlers so every modeled-but-unhandled intent still gets an answer.
pub struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn matches(&self, request: &Request) -> bool {
        matches!(request.kind, RequestKind::Intent { .. })
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        let name = request.intent_name().unwrap_or("an unnamed intent");
        Ok(Response::speak(format!("You just triggered {}", name)))
    }
}
