//! Chat tool: a tool controller that replays the whole conversation into
//! every prompt.
//!
//! The transcript is never truncated, so prompts grow with the conversation.

use providers::gemini::Generator;
use shared::chat::ChatTurn;
use shared::tool::{ToolError, ToolInfo, ToolState};
use std::sync::Arc;
use tokio::sync::watch;

use crate::controller::{require_non_blank, ToolCore};

pub const CHAT_INFO: ToolInfo = ToolInfo {
    id: "chat",
    name: "AI Chatbot",
    description: "Have a conversation with AI assistant",
    route: "chat",
};

/// Render the transcript and the fixed reply instructions into one prompt.
pub fn build_chat_prompt(turns: &[ChatTurn]) -> String {
    let mut conversation = String::new();
    for turn in turns {
        conversation.push('\n');
        conversation.push_str(turn.speaker());
        conversation.push_str(": ");
        conversation.push_str(&turn.content);
    }

    format!(
        r#"Previous conversation:
{conversation}

Please provide a helpful, natural, and contextually relevant response.
Keep the tone conversational but informative.
If you don't know something, admit it.
If the user asks something unclear, ask for clarification.

Respond in a direct way without mentioning that you're an AI."#
    )
}

pub struct ChatController {
    core: ToolCore,
    transcript: watch::Sender<Vec<ChatTurn>>,
}

impl ChatController {
    pub fn new() -> Self {
        let (transcript, _) = watch::channel(Vec::new());
        Self {
            core: ToolCore::new(CHAT_INFO.name),
            transcript,
        }
    }

    pub fn info(&self) -> ToolInfo {
        CHAT_INFO
    }

    pub fn initialize(&self, credential: &str) -> Result<(), ToolError> {
        self.core.initialize(credential)
    }

    pub fn initialize_with(&self, generator: Arc<dyn Generator>) {
        self.core.initialize_with(generator)
    }

    pub fn state(&self) -> ToolState {
        self.core.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ToolState> {
        self.core.subscribe()
    }

    /// Snapshot of the conversation so far
    pub fn messages(&self) -> Vec<ChatTurn> {
        self.transcript.borrow().clone()
    }

    pub fn subscribe_messages(&self) -> watch::Receiver<Vec<ChatTurn>> {
        self.transcript.subscribe()
    }

    /// Append `text` as a user turn, ask the model with the full transcript
    /// and append its answer. Failed generations are appended as their
    /// `"Error: ..."` text so the conversation shows them inline. A message
    /// that is refused (blank, busy, no client) leaves the transcript alone.
    pub async fn send_message(&self, text: &str) -> Result<String, ToolError> {
        if let Err(message) = require_non_blank(text, "Message cannot be empty") {
            return Err(self.core.reject(message));
        }

        let transcript = &self.transcript;
        let outcome = self
            .core
            .run_prepared(
                || {
                    transcript.send_modify(|turns| turns.push(ChatTurn::user(text)));
                    let turns = transcript.borrow();
                    build_chat_prompt(&turns)
                },
                |client, prompt| async move { client.try_generate_text(&prompt).await },
            )
            .await;

        let reply = match &outcome {
            Ok(text) => Some(text.clone()),
            Err(ToolError::Generation(e)) => Some(e.to_result_text()),
            Err(_) => None,
        };
        if let Some(reply) = reply {
            self.transcript
                .send_modify(|turns| turns.push(ChatTurn::assistant(reply)));
        }
        outcome
    }

    /// Forget the whole conversation.
    pub fn clear_chat(&self) {
        self.transcript.send_replace(Vec::new());
    }
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}
