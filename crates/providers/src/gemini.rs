use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::settings::ModelSettings;
use shared::tool::GenerationError;
use std::io::Cursor;
use tracing::{debug, warn};

use crate::describe_error;

/// Returned when the text model answers with no text
pub const NO_RESPONSE_TEXT: &str = "No response generated";
/// Returned when the vision model answers with no text
pub const NO_ANALYSIS_TEXT: &str = "No analysis generated";

// ── Request types ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiBlob,
    },
}

#[derive(Debug, Serialize)]
struct GeminiBlob {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    fn user(parts: Vec<GeminiPart>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts,
            }],
        }
    }
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

/// Pull a readable message out of a non-2xx response body.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GeminiErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    let detail: String = body.chars().take(800).collect();
    if detail.len() < body.len() {
        format!("{}...", detail)
    } else {
        detail
    }
}

// ── Generator ────────────────────────────────────────────────────────

/// Anything that can turn a prompt (and optionally an image) into text.
///
/// The `try_*` methods return a tagged result. `generate_text` and
/// `analyze_image` are the display surface: failures come back as an
/// `"Error: <message>"` string in place of the response and never as `Err`.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn try_generate_text(&self, prompt: &str) -> Result<String, GenerationError>;

    async fn try_analyze_image(
        &self,
        image: &DynamicImage,
        prompt: &str,
    ) -> Result<String, GenerationError>;

    async fn generate_text(&self, prompt: &str) -> String {
        match self.try_generate_text(prompt).await {
            Ok(text) => text,
            Err(e) => e.to_result_text(),
        }
    }

    async fn analyze_image(&self, image: &DynamicImage, prompt: &str) -> String {
        match self.try_analyze_image(image, prompt).await {
            Ok(text) => text,
            Err(e) => e.to_result_text(),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    models: ModelSettings,
}

impl GeminiClient {
    /// Create a client for `api_key`. Fails only when the key is blank.
    pub fn new(api_key: &str, models: &ModelSettings) -> Result<Self, GenerationError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GenerationError::MissingCredential);
        }
        let http = Client::builder()
            .build()
            .map_err(|e| GenerationError::Transport(describe_error(&e)))?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
            models: models.clone(),
        })
    }

    /// Create a client with the default model settings
    pub fn with_defaults(api_key: &str) -> Result<Self, GenerationError> {
        Self::new(api_key, &ModelSettings::default())
    }

    pub fn models(&self) -> &ModelSettings {
        &self.models
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.models.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Send one request and return the model's text, if any.
    async fn send(
        &self,
        model: &str,
        req: &GeminiRequest,
    ) -> Result<Option<String>, GenerationError> {
        debug!(model, "sending gemini request");
        let resp = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(req)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(describe_error(&e.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = api_error_message(status, &body);
            warn!(model, status = status.as_u16(), "gemini request rejected");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Decode(describe_error(&e.without_url())))?;
        Ok(body.text())
    }
}

/// Encode an image as a PNG inline-data part.
fn image_part(image: &DynamicImage) -> Result<GeminiPart, GenerationError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .map_err(|e| GenerationError::Image(e.to_string()))?;
    Ok(GeminiPart::InlineData {
        inline_data: GeminiBlob {
            mime_type: "image/png".to_string(),
            data: STANDARD.encode(&bytes),
        },
    })
}

#[async_trait]
impl Generator for GeminiClient {
    async fn try_generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let req = GeminiRequest::user(vec![GeminiPart::Text {
            text: prompt.to_string(),
        }]);
        let text = self.send(&self.models.text_model, &req).await?;
        Ok(text.unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()))
    }

    async fn try_analyze_image(
        &self,
        image: &DynamicImage,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let req = GeminiRequest::user(vec![
            image_part(image)?,
            GeminiPart::Text {
                text: prompt.to_string(),
            },
        ]);
        let text = self.send(&self.models.vision_model, &req).await?;
        Ok(text.unwrap_or_else(|| NO_ANALYSIS_TEXT.to_string()))
    }
}
