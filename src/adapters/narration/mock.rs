//! Mock narrator for testing.
//!
//! Configurable to return scripted texts or inject errors, with request
//! capture for verification. No network, no model.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AnalysisNarrator, NarrationError, NarrationRequest};

/// Scripted narrator implementation of the [`AnalysisNarrator`] port.
///
/// Responses are consumed in configuration order; once the script is
/// exhausted a fixed default text is returned.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
#[derive(Debug, Clone)]
pub struct MockNarrator {
    responses: Arc<Mutex<VecDeque<MockNarration>>>,
    requests: Arc<Mutex<Vec<NarrationRequest>>>,
}

/// A scripted narration outcome.
#[derive(Debug, Clone)]
pub enum MockNarration {
    Text(String),
    Error(NarrationError),
}

impl MockNarrator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a narrative text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("MockNarrator: responses lock poisoned")
            .push_back(MockNarration::Text(text.into()));
        self
    }

    /// Queues an error outcome.
    pub fn with_error(self, error: NarrationError) -> Self {
        self.responses
            .lock()
            .expect("MockNarrator: responses lock poisoned")
            .push_back(MockNarration::Error(error));
        self
    }

    /// Number of narration calls received.
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .expect("MockNarrator: requests lock poisoned")
            .len()
    }

    /// All captured requests, in call order.
    pub fn requests(&self) -> Vec<NarrationRequest> {
        self.requests
            .lock()
            .expect("MockNarrator: requests lock poisoned")
            .clone()
    }

    fn next_response(&self) -> MockNarration {
        self.responses
            .lock()
            .expect("MockNarrator: responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                MockNarration::Text("Анализ личности. РЕКОМЕНДАЦИИ: развивайтесь.".to_string())
            })
    }
}

impl Default for MockNarrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisNarrator for MockNarrator {
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError> {
        self.requests
            .lock()
            .expect("MockNarrator: requests lock poisoned")
            .push(request);

        match self.next_response() {
            MockNarration::Text(text) => Ok(text),
            MockNarration::Error(error) => Err(error),
        }
    }
}
