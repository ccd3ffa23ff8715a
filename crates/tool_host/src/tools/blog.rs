use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

/// Target post length. Unknown labels get the medium word count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlogLength {
    Short,
    #[default]
    Medium,
    Long,
    Other(String),
}

impl BlogLength {
    pub fn label(&self) -> &str {
        match self {
            BlogLength::Short => "short",
            BlogLength::Medium => "medium",
            BlogLength::Long => "long",
            BlogLength::Other(label) => label,
        }
    }

    fn word_target(&self) -> &'static str {
        match self {
            BlogLength::Short => "800-1000 words",
            BlogLength::Medium => "1200-1500 words",
            BlogLength::Long => "2000+ words",
            BlogLength::Other(_) => "1200-1500 words",
        }
    }
}

impl From<&str> for BlogLength {
    fn from(label: &str) -> Self {
        match label {
            "short" => BlogLength::Short,
            "medium" => BlogLength::Medium,
            "long" => BlogLength::Long,
            other => BlogLength::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlogRequest {
    pub topic: String,
    pub audience: String,
    pub tone: String,
    pub length: BlogLength,
    pub keywords: String,
}

impl BlogRequest {
    pub fn new(topic: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
            tone: "professional".to_string(),
            length: BlogLength::default(),
            keywords: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BlogGenerator;

impl PromptTool for BlogGenerator {
    type Request = BlogRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "blog",
        name: "Blog Generator",
        description: "Create engaging blog content",
        route: "blog",
    };

    fn validate(&self, r: &BlogRequest) -> Result<(), String> {
        require_min_chars(&r.topic, 5, "Topic must be at least 5 characters long")
    }

    fn build_prompt(&self, r: &BlogRequest) -> String {
        format!(
            r#"Generate a comprehensive blog post with the following details:

Topic: {topic}
Target Audience: {audience}
Tone: {tone}
Length: {length}
Keywords to Include: {keywords}

Please structure the blog post with:
1. Engaging title
2. Introduction that hooks the reader
3. Main content sections with subheadings
4. Practical examples or case studies
5. Key takeaways or conclusion
6. Call to action

Additional requirements:
- Use a {tone} writing style
- Target content length: {word_target}
- Naturally incorporate SEO keywords: {keywords}
- Include relevant statistics or data points
- Make it engaging and valuable for {audience}

Format the post with proper markdown for headings and sections."#,
            topic = r.topic,
            audience = r.audience,
            tone = r.tone,
            length = r.length.label(),
            keywords = r.keywords,
            word_target = r.length.word_target(),
        )
    }
}
