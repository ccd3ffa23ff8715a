use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

/// Kind of help requested. Unknown labels get a generic instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CodeHelp {
    #[default]
    Explanation,
    Debug,
    Optimize,
    Other(String),
}

impl CodeHelp {
    pub fn label(&self) -> &str {
        match self {
            CodeHelp::Explanation => "explanation",
            CodeHelp::Debug => "debug",
            CodeHelp::Optimize => "optimize",
            CodeHelp::Other(label) => label,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            CodeHelp::Explanation => "Please explain the concept clearly with examples.",
            CodeHelp::Debug => "Analyze the code for potential issues and provide solutions.",
            CodeHelp::Optimize => "Suggest optimizations and best practices.",
            CodeHelp::Other(_) => "Provide a detailed response with examples.",
        }
    }
}

impl From<&str> for CodeHelp {
    fn from(label: &str) -> Self {
        match label {
            "explanation" => CodeHelp::Explanation,
            "debug" => CodeHelp::Debug,
            "optimize" => CodeHelp::Optimize,
            other => CodeHelp::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodeHelpRequest {
    pub query: String,
    pub language: String,
    pub help: CodeHelp,
}

#[derive(Debug, Default)]
pub struct CodeAssistant;

impl PromptTool for CodeAssistant {
    type Request = CodeHelpRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "code_assistant",
        name: "Code Assistant",
        description: "Get help with coding",
        route: "code",
    };

    fn validate(&self, r: &CodeHelpRequest) -> Result<(), String> {
        require_min_chars(&r.query, 10, "Query must be at least 10 characters long")
    }

    fn build_prompt(&self, r: &CodeHelpRequest) -> String {
        format!(
            r#"As an expert programmer, help with the following code-related query:
Query: {query}
Programming Language: {language}
Type of Help: {help}

{instruction}

Format the response with proper markdown for code blocks and sections."#,
            query = r.query,
            language = r.language,
            help = r.help.label(),
            instruction = r.help.instruction(),
        )
    }
}
