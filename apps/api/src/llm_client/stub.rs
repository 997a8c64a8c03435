use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionGateway, LlmError, PromptMessage};

/// Test double: records every call and answers with a canned reply,
/// or with a rate-limit error when built with `failing`.
pub struct StubGateway {
    reply: Option<String>,
    pub calls: Mutex<Vec<(Vec<PromptMessage>, f32, u32)>>,
}

impl StubGateway {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(
        &self,
        messages: &[PromptMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), temperature, max_tokens));
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "rate limited".to_string(),
        })
    }
}
