use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

pub const MIN_TEXT_CHARS: usize = 50;

/// Requested summary length. Unknown labels are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
    Other(String),
}

impl SummaryLength {
    pub fn label(&self) -> &str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
            SummaryLength::Other(label) => label,
        }
    }
}

impl From<&str> for SummaryLength {
    fn from(label: &str) -> Self {
        match label {
            "short" => SummaryLength::Short,
            "medium" => SummaryLength::Medium,
            "long" => SummaryLength::Long,
            other => SummaryLength::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub length: SummaryLength,
    pub style: String,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            length: SummaryLength::default(),
            style: "informative".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TextSummarizer;

impl PromptTool for TextSummarizer {
    type Request = SummaryRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "summarizer",
        name: "Text Summarizer",
        description: "Get concise summaries of long texts",
        route: "summarize",
    };

    fn validate(&self, r: &SummaryRequest) -> Result<(), String> {
        require_min_chars(
            &r.text,
            MIN_TEXT_CHARS,
            "Text must be at least 50 characters long",
        )
    }

    fn build_prompt(&self, r: &SummaryRequest) -> String {
        format!(
            r#"Summarize the following text:
Text: {text}

Please provide a {length} length summary in a {style} style.
Focus on the key points and maintain the main message.

Length guide:
- Short: 2-3 sentences
- Medium: 4-5 sentences
- Long: 6-8 sentences"#,
            text = r.text,
            length = r.length.label(),
            style = r.style,
        )
    }
}
