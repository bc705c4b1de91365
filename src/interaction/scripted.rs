use super::{ConfirmationGate, Navigator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers prompts from a pre-recorded queue and remembers what was asked.
///
/// An exhausted queue answers `false`.
#[derive(Debug, Default)]
pub struct ScriptedConfirmation {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_answer(&self, answer: bool) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(answer);
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ConfirmationGate for ScriptedConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(false)
    }
}

/// Navigator that only records the routes it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn last_route(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(route.to_string());
        }
    }
}
