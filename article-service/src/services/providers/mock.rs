//! Mock provider for testing.

use super::{GenerationOptions, ProviderError, TextGenerator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock text generator that replays scripted replies.
///
/// Replies are consumed in order; once the queue is empty every call echoes
/// the prompt back, so simple tests need no scripting at all.
#[derive(Default)]
pub struct MockTextGenerator {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies
            .lock()
            .expect("mock replies lock poisoned")
            .push_back(Ok(text.into()));
    }

    /// Queue an error reply.
    pub fn push_error(&self, err: ProviderError) {
        self.replies
            .lock()
            .expect("mock replies lock poisoned")
            .push_back(Err(err));
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _options: GenerationOptions,
    ) -> Result<String, ProviderError> {
        let scripted = self
            .replies
            .lock()
            .expect("mock replies lock poisoned")
            .pop_front();

        match scripted {
            Some(reply) => reply,
            None => Ok(format!("Mock response for: {}", prompt)),
        }
    }
}
