//! # Request dispatch
//!
//! Routes one request to one response. Handlers are scanned in registration order and the
//! first whose predicate matches produces the response; a failed handler or an unmatched
//! request falls back to the error responder, so every request gets exactly one answer.

use skill_core::{ErrorResponder, Request, RequestHandler, RequestKind, Response, SkillError};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Ordered dispatch table: handlers tried first to last, plus the error responder that
/// answers when nothing matches or a matched handler fails. Built once at startup;
/// immutable afterwards.
#[derive(Clone)]
pub struct Dispatcher {
    handlers: Vec<Arc<dyn RequestHandler>>,
    error_responder: Arc<dyn ErrorResponder>,
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers yet. The error responder is mandatory:
    /// without it the one-response-per-request guarantee cannot hold.
    pub fn new(error_responder: Arc<dyn ErrorResponder>) -> Self {
        Self {
            handlers: Vec::new(),
            error_responder,
        }
    }

    /// Appends a handler. Order matters: first match wins.
    pub fn add_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Routes the request to the first matching handler and returns its response.
    /// Never fails: handler errors and unmatched requests are answered by the
    /// error responder with the original request and the failure.
    #[instrument(skip(self, request))]
    pub async fn dispatch(&self, request: &Request) -> Response {
        info!(
            request_kind = %request.kind.name(),
            locale = %request.locale.tag(),
            "step: dispatch started"
        );

        // A request that could not be read has nothing for a predicate to match on.
        if let RequestKind::UnknownError { detail } = &request.kind {
            let err = SkillError::Envelope(detail.clone());
            error!(error = %err, "step: unreadable request");
            return self.error_responder.respond_to_error(request, &err).await;
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.matches(request) {
                continue;
            }
            info!(
                request_kind = %request.kind.name(),
                handler = %handler_name,
                "step: handler matched"
            );

            match handler.respond(request).await {
                Ok(response) => {
                    info!(
                        handler = %handler_name,
                        should_end_session = response.should_end_session,
                        "step: dispatch finished"
                    );
                    return response;
                }
                Err(err) => {
                    error!(
                        handler = %handler_name,
                        error = %err,
                        "step: handler failed, falling back to error responder"
                    );
                    return self.error_responder.respond_to_error(request, &err).await;
                }
            }
        }

        let err = SkillError::Unhandled {
            request_kind: request.kind.name().to_string(),
        };
        error!(error = %err, "step: no handler matched");
        self.error_responder.respond_to_error(request, &err).await
    }
}

// Unit/integration tests live in tests/dispatch_test.rs
