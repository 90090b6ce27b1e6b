//! Mock analysis backend for testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{AnalysisBackend, UploadError};
use crate::AnalysisResult;
use crate::upload::UploadRequest;

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful analysis.
    Success(AnalysisResult),
    /// Simulate a non-2xx response carrying a server `error` string.
    Rejected(String),
    /// Simulate a non-2xx response with no usable `error` field.
    Failed(u16),
    /// Simulate a transport failure.
    Network(String),
}

/// A hand-rolled mock implementing [`AnalysisBackend`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency.
/// - Call counting via [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    /// If non-empty, each call pops the next response.
    responses: Mutex<Vec<MockResponse>>,
    /// Fallback when the sequence is empty (or single-response mode).
    fallback: MockResponse,
    delay: Option<Duration>,
    call_count: AtomicUsize,
}

impl MockBackend {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            delay: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        let fallback = responses.first().cloned().unwrap();
        Self {
            responses: Mutex::new(responses),
            fallback,
            delay: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `analyze()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        if let Some(resp) = seq.pop() {
            resp
        } else {
            self.fallback.clone()
        }
    }
}

impl AnalysisBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn analyze<'a>(
        &'a self,
        _request: &'a UploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, UploadError>> + Send + 'a>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }

            match response {
                MockResponse::Success(analysis) => Ok(analysis),
                MockResponse::Rejected(msg) => Err(UploadError::Rejected(msg)),
                MockResponse::Failed(status) => Err(UploadError::Failed(status)),
                MockResponse::Network(msg) => Err(UploadError::Network(msg)),
            }
        })
    }
}
