use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::llm::client::{ChatMessage, CompletionRequest, GigaChatClient};
use crate::llm::prompts::{
    EDITOR_SYSTEM_PROMPT, PROOFREADER_SYSTEM_PROMPT, TRANSLATOR_SYSTEM_PROMPT,
    build_editor_prompt, build_proofreader_prompt, build_translator_prompt,
};

/// Turns input text into the user-message content for a stage
pub type PromptTemplate = fn(&str) -> String;

/// One text-transforming role in the pipeline
#[async_trait]
pub trait Agent: Send + Sync {
    /// Role name used in logs
    fn name(&self) -> &str {
        "agent"
    }

    /// Transform the input text, returning the replacement text
    async fn process(&self, text: &str) -> Result<String>;
}

#[async_trait]
impl<F> Agent for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    async fn process(&self, text: &str) -> Result<String> {
        self(text)
    }
}

/// A role backed by one completion call: a fixed system instruction plus
/// a template for the user message. The three pipeline roles differ only
/// in this data.
pub struct ChatAgent {
    client: Arc<GigaChatClient>,
    name: &'static str,
    system_prompt: &'static str,
    build_user_prompt: PromptTemplate,
}

impl ChatAgent {
    pub fn new(
        client: Arc<GigaChatClient>,
        name: &'static str,
        system_prompt: &'static str,
        build_user_prompt: PromptTemplate,
    ) -> Self {
        Self {
            client,
            name,
            system_prompt,
            build_user_prompt,
        }
    }

    /// English-to-Russian literary translation
    pub fn translator(client: Arc<GigaChatClient>) -> Self {
        Self::new(
            client,
            "translator",
            TRANSLATOR_SYSTEM_PROMPT,
            build_translator_prompt,
        )
    }

    /// Style and readability editing of the Russian draft
    pub fn editor(client: Arc<GigaChatClient>) -> Self {
        Self::new(client, "editor", EDITOR_SYSTEM_PROMPT, build_editor_prompt)
    }

    /// Grammar, spelling and punctuation corrections
    pub fn proofreader(client: Arc<GigaChatClient>) -> Self {
        Self::new(
            client,
            "proofreader",
            PROOFREADER_SYSTEM_PROMPT,
            build_proofreader_prompt,
        )
    }
}

#[async_trait]
impl Agent for ChatAgent {
    fn name(&self) -> &str {
        self.name
    }

    async fn process(&self, text: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.client.model().to_string(),
            messages: vec![
                ChatMessage::system(self.system_prompt),
                ChatMessage::user((self.build_user_prompt)(text)),
            ],
        };

        let response = self.client.complete(&request).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            Error::Upstream("completion response contained no choices".to_string())
        })?;

        Ok(choice.message.content)
    }
}
