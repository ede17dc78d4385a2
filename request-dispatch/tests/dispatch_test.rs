//! Integration tests for [`request_dispatch::Dispatcher`].
//!
//! Covers: first-match-wins ordering, non-matching handlers being skipped, the error
//! responder answering unmatched requests, and a failing handler falling back to the
//! error responder. Every test asserts that dispatch produces exactly one response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use request_dispatch::Dispatcher;
use skill_core::{
    ErrorResponder, Locale, Request, RequestHandler, Response, Result, SkillError,
};

fn launch_request() -> Request {
    Request::launch(Locale::EnUs)
}

/// Handler that matches everything and counts how often it responds.
struct CountingHandler {
    reply: &'static str,
    respond_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl RequestHandler for CountingHandler {
    fn matches(&self, _request: &Request) -> bool {
        true
    }

    async fn respond(&self, _request: &Request) -> Result<Response> {
        self.respond_count.fetch_add(1, Ordering::SeqCst);
        Ok(Response::speak(self.reply))
    }
}

/// Handler that never matches; counts how often its predicate is consulted.
struct NeverMatchesHandler {
    matches_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl RequestHandler for NeverMatchesHandler {
    fn matches(&self, _request: &Request) -> bool {
        self.matches_count.fetch_add(1, Ordering::SeqCst);
        false
    }

    async fn respond(&self, _request: &Request) -> Result<Response> {
        panic!("respond must not be called for a non-matching handler");
    }
}

/// Error responder that records the error message it was given.
struct RecordingResponder {
    seen: Arc<std::sync::Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl ErrorResponder for RecordingResponder {
    async fn respond_to_error(&self, _request: &Request, error: &SkillError) -> Response {
        self.seen.lock().unwrap().push(error.to_string());
        Response::speak("sorry")
    }
}

fn recording_responder() -> (Arc<RecordingResponder>, Arc<std::sync::Mutex<Vec<String>>>) {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    (Arc::new(RecordingResponder { seen: seen.clone() }), seen)
}

/// **Test: First matching handler wins; later handlers never respond.**
///
/// **Setup:** Two always-matching handlers with distinct replies.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** Response carries the first handler's reply; second handler respond_count=0.
#[tokio::test]
async fn test_first_match_wins() {
    let first_count = Arc::new(AtomicUsize::new(0));
    let second_count = Arc::new(AtomicUsize::new(0));
    let (responder, _) = recording_responder();

    let dispatcher = Dispatcher::new(responder)
        .add_handler(Arc::new(CountingHandler {
            reply: "first",
            respond_count: first_count.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            reply: "second",
            respond_count: second_count.clone(),
        }));

    let response = dispatcher.dispatch(&launch_request()).await;

    assert_eq!(response.speech.as_deref(), Some("first"));
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 0);
}

/// **Test: Non-matching handlers are consulted but skipped.**
///
/// **Setup:** A never-matching handler ahead of an always-matching one.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** Response comes from the matching handler; the predicate of the
/// non-matching handler was consulted exactly once.
#[tokio::test]
async fn test_non_matching_handler_skipped() {
    let matches_count = Arc::new(AtomicUsize::new(0));
    let respond_count = Arc::new(AtomicUsize::new(0));
    let (responder, _) = recording_responder();

    let dispatcher = Dispatcher::new(responder)
        .add_handler(Arc::new(NeverMatchesHandler {
            matches_count: matches_count.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            reply: "matched",
            respond_count: respond_count.clone(),
        }));

    let response = dispatcher.dispatch(&launch_request()).await;

    assert_eq!(response.speech.as_deref(), Some("matched"));
    assert_eq!(matches_count.load(Ordering::SeqCst), 1);
    assert_eq!(respond_count.load(Ordering::SeqCst), 1);
}

/// **Test: No handler matches; the error responder answers with an Unhandled error.**
///
/// **Setup:** One never-matching handler, recording error responder.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** Response is the responder's apology; recorded error names the request kind.
#[tokio::test]
async fn test_unmatched_request_goes_to_error_responder() {
    let matches_count = Arc::new(AtomicUsize::new(0));
    let (responder, seen) = recording_responder();

    let dispatcher = Dispatcher::new(responder).add_handler(Arc::new(NeverMatchesHandler {
        matches_count,
    }));

    let response = dispatcher.dispatch(&launch_request()).await;

    assert_eq!(response.speech.as_deref(), Some("sorry"));
    let errors = seen.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("LaunchRequest"), "got: {}", errors[0]);
}

/// **Test: A failing handler falls back to the error responder.**
///
/// **Setup:** One matching handler whose respond returns Err; recording error responder.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** Response is the responder's apology; recorded error carries the handler message.
#[tokio::test]
async fn test_failing_handler_falls_back() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl RequestHandler for FailingHandler {
        fn matches(&self, _request: &Request) -> bool {
            true
        }

        async fn respond(&self, _request: &Request) -> Result<Response> {
            Err(SkillError::Handler("boom".to_string()))
        }
    }

    let (responder, seen) = recording_responder();
    let dispatcher = Dispatcher::new(responder).add_handler(Arc::new(FailingHandler));

    let response = dispatcher.dispatch(&launch_request()).await;

    assert_eq!(response.speech.as_deref(), Some("sorry"));
    let errors = seen.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("boom"), "got: {}", errors[0]);
}

/// **Test: An unreadable request skips the handlers and goes straight to the responder.**
///
/// **Setup:** An always-matching handler behind an UnknownError request.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** Handler respond_count=0; recorded error carries the envelope detail.
#[tokio::test]
async fn test_unknown_error_request_bypasses_handlers() {
    let respond_count = Arc::new(AtomicUsize::new(0));
    let (responder, seen) = recording_responder();

    let dispatcher = Dispatcher::new(responder).add_handler(Arc::new(CountingHandler {
        reply: "never",
        respond_count: respond_count.clone(),
    }));

    let request = Request::unknown_error(Locale::EnUs, "expected value at line 1");
    let response = dispatcher.dispatch(&request).await;

    assert_eq!(response.speech.as_deref(), Some("sorry"));
    assert_eq!(respond_count.load(Ordering::SeqCst), 0);
    let errors = seen.lock().unwrap();
    assert!(
        errors[0].contains("expected value at line 1"),
        "got: {}",
        errors[0]
    );
}

/// **Test: A dispatcher with no handlers still answers.**
///
/// **Setup:** Dispatcher with only the error responder.
/// **Action:** `dispatcher.dispatch(&request)`.
/// **Expected:** The error responder's response is returned.
#[tokio::test]
async fn test_empty_dispatcher_still_answers() {
    let (responder, seen) = recording_responder();
    let dispatcher = Dispatcher::new(responder);

    let response = dispatcher.dispatch(&launch_request()).await;

    assert_eq!(response.speech.as_deref(), Some("sorry"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}
