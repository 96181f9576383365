use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use story_engine::{FailureKind, GenerateError, TextGenerator};

/// Replays scripted replies in order and records every prompt it was sent.
/// Once the script runs out it answers with the no-characters sentinel.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    pub fn new<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn with_results(replies: Vec<Result<String, GenerateError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(story_core::NO_CHARACTERS_SENTINEL.to_string()))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

#[allow(dead_code)]
pub fn network_error() -> GenerateError {
    GenerateError {
        kind: FailureKind::Network,
        message: "connection refused".to_string(),
    }
}

pub fn init_logging() {
    engine_logging::initialize_for_tests();
}
