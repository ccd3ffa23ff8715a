//! Generic tool controller.
//!
//! Every tool follows the same cycle: validate the request, build a prompt,
//! hand it to the generation client and publish the answer. [`ToolCore`]
//! owns the observable state and the client; [`ToolController`] pairs a core
//! with a [`PromptTool`] that supplies validation and the prompt template.

use parking_lot::RwLock;
use providers::gemini::{GeminiClient, Generator};
use shared::settings::ModelSettings;
use shared::tool::{error_text, GenerationError, ToolError, ToolInfo, ToolState};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// A prompt-based tool: input validation plus a prompt template.
pub trait PromptTool: Send + Sync {
    /// Structured fields collected for one call
    type Request: Send + Sync;

    /// Catalog entry for this tool
    const INFO: ToolInfo;

    /// Check the tool's precondition. The `Err` message is shown to the user verbatim.
    fn validate(&self, _request: &Self::Request) -> Result<(), String> {
        Ok(())
    }

    /// Build the prompt sent to the text model.
    fn build_prompt(&self, request: &Self::Request) -> String;
}

/// Fail with `message` unless `value` has at least `min` characters.
pub(crate) fn require_min_chars(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Fail with `message` if `value` is empty or whitespace.
pub(crate) fn require_non_blank(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Clears `busy` if a dispatched call is dropped before it publishes.
struct BusyGuard<'a> {
    state: &'a watch::Sender<ToolState>,
    armed: bool,
}

impl BusyGuard<'_> {
    fn finish(mut self, result: String) {
        self.armed = false;
        self.state.send_modify(|s| {
            s.busy = false;
            s.result = result;
        });
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|s| s.busy = false);
        }
    }
}

/// State machine shared by every tool: `Idle -> Busy -> Idle`.
pub struct ToolCore {
    name: &'static str,
    client: RwLock<Option<Arc<dyn Generator>>>,
    state: watch::Sender<ToolState>,
}

impl ToolCore {
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(ToolState::default());
        Self {
            name,
            client: RwLock::new(None),
            state,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Install a Gemini client for `credential` using the default models.
    /// Re-initializing replaces the previous client.
    pub fn initialize(&self, credential: &str) -> Result<(), ToolError> {
        self.initialize_with_models(credential, &ModelSettings::default())
    }

    pub fn initialize_with_models(
        &self,
        credential: &str,
        models: &ModelSettings,
    ) -> Result<(), ToolError> {
        let client = GeminiClient::new(credential, models)?;
        self.initialize_with(Arc::new(client));
        Ok(())
    }

    /// Install any generator as this tool's client.
    pub fn initialize_with(&self, generator: Arc<dyn Generator>) {
        *self.client.write() = Some(generator);
    }

    pub fn is_initialized(&self) -> bool {
        self.client.read().is_some()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ToolState {
        self.state.borrow().clone()
    }

    /// Watch the state; the receiver sees every published change.
    pub fn subscribe(&self) -> watch::Receiver<ToolState> {
        self.state.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Record a failed precondition. Nothing is dispatched and `busy` is untouched.
    pub fn reject(&self, message: String) -> ToolError {
        debug!(tool = self.name, %message, "request rejected");
        self.state.send_modify(|s| s.error = Some(message.clone()));
        ToolError::Validation(message)
    }

    /// Dispatch one request through the installed client.
    ///
    /// Success text is published to `result` verbatim. A remote failure is
    /// published as `"Error: <message>"` and also returned as
    /// [`ToolError::Generation`]. A second call while one is in flight is
    /// refused with [`ToolError::Busy`] and leaves the state alone.
    pub async fn run<F, Fut>(&self, call: F) -> Result<String, ToolError>
    where
        F: FnOnce(Arc<dyn Generator>) -> Fut,
        Fut: Future<Output = Result<String, GenerationError>>,
    {
        self.run_prepared(|| (), move |client, ()| call(client)).await
    }

    /// Like [`ToolCore::run`], but `prepare` runs only once the request owns
    /// the busy flag, and its output is handed to `call`. Nothing in
    /// `prepare` happens for a refused request.
    pub async fn run_prepared<P, T, F, Fut>(
        &self,
        prepare: P,
        call: F,
    ) -> Result<String, ToolError>
    where
        P: FnOnce() -> T,
        F: FnOnce(Arc<dyn Generator>, T) -> Fut,
        Fut: Future<Output = Result<String, GenerationError>>,
    {
        let client = self.client.read().clone();
        let Some(client) = client else {
            let err = ToolError::NotInitialized;
            warn!(tool = self.name, "generate called before initialize");
            self.state.send_modify(|s| {
                s.error = Some(err.to_string());
                s.result = error_text(&err);
            });
            return Err(err);
        };

        let mut claimed = false;
        self.state.send_if_modified(|s| {
            if s.busy {
                return false;
            }
            s.busy = true;
            s.error = None;
            claimed = true;
            true
        });
        if !claimed {
            debug!(tool = self.name, "request already in flight");
            return Err(ToolError::Busy);
        }
        let guard = BusyGuard {
            state: &self.state,
            armed: true,
        };

        let input = prepare();
        debug!(tool = self.name, "dispatching request");
        match call(client, input).await {
            Ok(text) => {
                guard.finish(text.clone());
                Ok(text)
            }
            Err(e) => {
                warn!(tool = self.name, error = %e, "generation failed");
                guard.finish(e.to_result_text());
                Err(ToolError::Generation(e))
            }
        }
    }
}

/// One tool's controller: a [`PromptTool`] driven by a [`ToolCore`].
pub struct ToolController<T: PromptTool> {
    tool: T,
    core: ToolCore,
}

impl<T: PromptTool + Default> ToolController<T> {
    pub fn new() -> Self {
        Self::with_tool(T::default())
    }
}

impl<T: PromptTool + Default> Default for ToolController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PromptTool> ToolController<T> {
    pub fn with_tool(tool: T) -> Self {
        Self {
            tool,
            core: ToolCore::new(T::INFO.name),
        }
    }

    pub fn info(&self) -> ToolInfo {
        T::INFO
    }

    pub fn initialize(&self, credential: &str) -> Result<(), ToolError> {
        self.core.initialize(credential)
    }

    pub fn initialize_with_models(
        &self,
        credential: &str,
        models: &ModelSettings,
    ) -> Result<(), ToolError> {
        self.core.initialize_with_models(credential, models)
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

    /// The prompt this controller would send for `request`.
    pub fn prompt_for(&self, request: &T::Request) -> String {
        self.tool.build_prompt(request)
    }

    /// Validate `request`, send its prompt and publish the answer.
    pub async fn generate(&self, request: T::Request) -> Result<String, ToolError> {
        if let Err(message) = self.tool.validate(&request) {
            return Err(self.core.reject(message));
        }
        let prompt = self.tool.build_prompt(&request);
        self.core
            .run(move |client| async move { client.try_generate_text(&prompt).await })
            .await
    }
}
