//! Image analyzer: a tool controller that also holds the selected image and
//! talks to the vision model.

use image::DynamicImage;
use parking_lot::RwLock;
use providers::gemini::Generator;
use shared::tool::{ToolError, ToolInfo, ToolState};
use std::sync::Arc;
use tokio::sync::watch;

use crate::controller::ToolCore;

pub const IMAGE_INFO: ToolInfo = ToolInfo {
    id: "image",
    name: "Image Analyzer",
    description: "Analyze images using AI",
    route: "image",
};

const GENERAL_PROMPT: &str = "Analyze this image and provide a detailed description including:
- Main subjects/objects
- Colors and composition
- Mood/atmosphere
- Notable details
- Context or setting";

const TECHNICAL_PROMPT: &str = "Provide a technical analysis of this image including:
- Image quality and resolution
- Lighting conditions
- Composition techniques
- Camera settings (if detectable)
- Suggested improvements";

const FALLBACK_PROMPT: &str = "Describe what you see in this image.";

/// Which analysis to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageAnalysis {
    #[default]
    General,
    Technical,
    /// The query is sent verbatim as the whole prompt
    Custom(String),
    Other(String),
}

impl ImageAnalysis {
    /// Map a UI label to an analysis; `custom_query` is only used for `"custom"`.
    pub fn from_label(label: &str, custom_query: &str) -> Self {
        match label {
            "general" => ImageAnalysis::General,
            "technical" => ImageAnalysis::Technical,
            "custom" => ImageAnalysis::Custom(custom_query.to_string()),
            other => ImageAnalysis::Other(other.to_string()),
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            ImageAnalysis::General => GENERAL_PROMPT.to_string(),
            ImageAnalysis::Technical => TECHNICAL_PROMPT.to_string(),
            ImageAnalysis::Custom(query) => query.clone(),
            ImageAnalysis::Other(_) => FALLBACK_PROMPT.to_string(),
        }
    }
}

pub struct ImageAnalyzerController {
    core: ToolCore,
    image: RwLock<Option<Arc<DynamicImage>>>,
}

impl ImageAnalyzerController {
    pub fn new() -> Self {
        Self {
            core: ToolCore::new(IMAGE_INFO.name),
            image: RwLock::new(None),
        }
    }

    pub fn info(&self) -> ToolInfo {
        IMAGE_INFO
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

    /// Replace the selected image.
    pub fn set_image(&self, image: DynamicImage) {
        *self.image.write() = Some(Arc::new(image));
    }

    pub fn selected_image(&self) -> Option<Arc<DynamicImage>> {
        self.image.read().clone()
    }

    /// Run `analysis` on the selected image and publish the result.
    pub async fn analyze(&self, analysis: ImageAnalysis) -> Result<String, ToolError> {
        let image = self.image.read().clone();
        let Some(image) = image else {
            return Err(self.core.reject("Please select an image first".to_string()));
        };
        let prompt = analysis.prompt();
        self.core
            .run(move |client| async move { client.try_analyze_image(&image, &prompt).await })
            .await
    }
}

impl Default for ImageAnalyzerController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingGenerator;

    fn pixel(color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(1, 1, image::Rgb(color)))
    }

    #[tokio::test]
    async fn test_analyze_without_image() {
        let generator = RecordingGenerator::replying("unused");
        let analyzer = ImageAnalyzerController::new();
        analyzer.initialize_with(generator.clone());

        for analysis in [ImageAnalysis::General, ImageAnalysis::Custom("hi".into())] {
            let err = analyzer.analyze(analysis).await.unwrap_err();
            assert_eq!(
                err,
                ToolError::Validation("Please select an image first".into())
            );
        }

        let state = analyzer.state();
        assert!(!state.busy);
        assert_eq!(state.error.as_deref(), Some("Please select an image first"));
        assert!(generator.image_prompts().is_empty());
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_uses_vision_operation() {
        let generator = RecordingGenerator::replying("A red square.");
        let analyzer = ImageAnalyzerController::new();
        analyzer.initialize_with(generator.clone());
        analyzer.set_image(pixel([255, 0, 0]));

        let text = analyzer.analyze(ImageAnalysis::General).await.unwrap();

        assert_eq!(text, "A red square.");
        assert_eq!(analyzer.state().result, "A red square.");
        let prompts = generator.image_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("- Main subjects/objects"));
        assert!(generator.prompts().is_empty());
    }

    #[test]
    fn test_analysis_prompts() {
        assert!(ImageAnalysis::from_label("technical", "")
            .prompt()
            .contains("Camera settings (if detectable)"));
        assert_eq!(
            ImageAnalysis::from_label("custom", "Count the cats").prompt(),
            "Count the cats"
        );
        assert_eq!(
            ImageAnalysis::from_label("artistic", "ignored").prompt(),
            "Describe what you see in this image."
        );
    }

    #[test]
    fn test_set_image_replaces_previous() {
        let analyzer = ImageAnalyzerController::new();
        analyzer.set_image(pixel([0, 0, 0]));
        analyzer.set_image(DynamicImage::ImageRgb8(image::RgbImage::new(4, 3)));

        let image = analyzer.selected_image().unwrap();
        assert_eq!((image.width(), image.height()), (4, 3));
    }
}
