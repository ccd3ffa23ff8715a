use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

#[derive(Debug, Clone)]
pub struct EnhanceRequest {
    pub prompt: String,
    pub goal: String,
    pub style: String,
}

impl EnhanceRequest {
    pub fn new(prompt: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            goal: goal.into(),
            style: "detailed".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PromptEnhancer;

impl PromptTool for PromptEnhancer {
    type Request = EnhanceRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "prompt_enhancer",
        name: "Prompt Enhancer",
        description: "Improve your AI prompts for better results",
        route: "prompt",
    };

    fn validate(&self, r: &EnhanceRequest) -> Result<(), String> {
        require_min_chars(&r.prompt, 5, "Prompt must be at least 5 characters long")
    }

    fn build_prompt(&self, r: &EnhanceRequest) -> String {
        format!(
            r#"As an AI prompt engineering expert, enhance the following prompt to get better results:

Original Prompt: {prompt}
Goal: {goal}
Style Preference: {style}

Please provide:
1. An enhanced version of the prompt
2. Explanation of improvements made
3. Additional tips for better results
4. Alternative versions (if applicable)

Focus on making the prompt:
- More specific and detailed
- Better structured
- Including relevant context
- Using clear instructions
- Incorporating best practices

Format the response in a clear, organized way."#,
            prompt = r.prompt,
            goal = r.goal,
            style = r.style,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_boundary() {
        assert_eq!(
            PromptEnhancer.validate(&EnhanceRequest::new("draw", "art")),
            Err("Prompt must be at least 5 characters long".to_string())
        );
        assert!(PromptEnhancer
            .validate(&EnhanceRequest::new("draw!", "art"))
            .is_ok());
    }

    #[test]
    fn test_prompt_mentions_original_and_style() {
        let prompt = PromptEnhancer.build_prompt(&EnhanceRequest::new("draw a cat", "cute art"));
        assert!(prompt.contains("Original Prompt: draw a cat"));
        assert!(prompt.contains("Goal: cute art"));
        assert!(prompt.contains("Style Preference: detailed"));
    }
}
