//! Injected confirmation capability for destructive actions.
//!
//! The workspace never calls a platform-native modal directly — it asks
//! whatever [`ConfirmPrompt`] it was constructed with, so tests script the
//! answers and the CLI wires in a stdin prompt or `--yes`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

/// A blocking yes/no prompt. Every destructive action asks independently;
/// there is no "remember my answer".
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything. Used by `cnv research delete --yes`.
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmPrompt for AlwaysConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Scripted prompt for tests: answers come from a queue, prompts are
/// recorded. An exhausted script declines.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    #[must_use]
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every message this prompt has been asked, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedConfirm {
    async fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}
