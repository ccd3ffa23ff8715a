use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

#[derive(Debug, Clone)]
pub struct HashtagRequest {
    pub content: String,
    pub count: u32,
    pub style: String,
}

impl HashtagRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            count: 30,
            style: "trending".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct HashtagGenerator;

impl PromptTool for HashtagGenerator {
    type Request = HashtagRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "hashtags",
        name: "Hashtag Generator",
        description: "Generate relevant Instagram hashtags",
        route: "hashtags",
    };

    fn validate(&self, r: &HashtagRequest) -> Result<(), String> {
        require_min_chars(&r.content, 10, "Content must be at least 10 characters long")
    }

    fn build_prompt(&self, r: &HashtagRequest) -> String {
        format!(
            r#"Generate Instagram hashtags for the following content:
Content: {content}

Please provide {count} relevant hashtags that are:
- Popular and trending
- Specific to the content
- Mix of popular and niche hashtags
- Style: {style}

Format the hashtags in a clean, easy-to-copy format."#,
            content = r.content,
            count = r.count,
            style = r.style,
        )
    }
}
