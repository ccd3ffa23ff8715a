//! Fake generators for exercising controllers without a network.

use async_trait::async_trait;
use image::DynamicImage;
use parking_lot::Mutex;
use providers::gemini::Generator;
use shared::tool::GenerationError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every prompt and answers from a queue of replies.
pub struct RecordingGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    fallback: Result<String, GenerationError>,
    prompts: Mutex<Vec<String>>,
    image_prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    fn build(
        replies: Vec<Result<String, GenerationError>>,
        fallback: Result<String, GenerationError>,
    ) -> Arc<Self> {
        init_tracing();
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            fallback,
            prompts: Mutex::new(Vec::new()),
            image_prompts: Mutex::new(Vec::new()),
        })
    }

    /// Always answers `text`.
    pub fn replying(text: &str) -> Arc<Self> {
        Self::build(Vec::new(), Ok(text.to_string()))
    }

    /// Always fails with `error`.
    pub fn failing(error: GenerationError) -> Arc<Self> {
        Self::build(Vec::new(), Err(error))
    }

    /// Answers each reply in order, then repeats the last one.
    pub fn with_replies(replies: &[&str]) -> Arc<Self> {
        let fallback = replies.last().map(|r| r.to_string()).unwrap_or_default();
        Self::build(
            replies.iter().map(|r| Ok(r.to_string())).collect(),
            Ok(fallback),
        )
    }

    /// Prompts sent to the text operation, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Prompts sent to the vision operation, oldest first
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().clone()
    }

    fn next_reply(&self) -> Result<String, GenerationError> {
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl Generator for RecordingGenerator {
    async fn try_generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        self.next_reply()
    }

    async fn try_analyze_image(
        &self,
        _image: &DynamicImage,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        self.image_prompts.lock().push(prompt.to_string());
        self.next_reply()
    }
}

/// Blocks every call until [`GatedGenerator::release`] is called.
pub struct GatedGenerator {
    reply: String,
    called: Notify,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedGenerator {
    pub fn new(reply: &str) -> Arc<Self> {
        init_tracing();
        Arc::new(Self {
            reply: reply.to_string(),
            called: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub async fn wait_until_called(&self) {
        self.called.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn hold(&self) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.called.notify_one();
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}

#[async_trait]
impl Generator for GatedGenerator {
    async fn try_generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.hold().await
    }

    async fn try_analyze_image(
        &self,
        _image: &DynamicImage,
        _prompt: &str,
    ) -> Result<String, GenerationError> {
        self.hold().await
    }
}
