//! Catalog of every tool the host offers, in home screen order.

use shared::tool::ToolInfo;

use crate::chat::CHAT_INFO;
use crate::controller::PromptTool;
use crate::image::IMAGE_INFO;
use crate::tools::{
    BlogGenerator, CodeAssistant, EmailComposer, GitHubAnalyzer, HashtagGenerator, LanguageTutor,
    PresentationGenerator, PromptEnhancer, RecipeGenerator, StoryPlotGenerator, TextSummarizer,
};

/// The developer profile page. It talks to GitHub, not Gemini, so it stays
/// usable without a credential.
pub const DEVELOPER_PROFILE_INFO: ToolInfo = ToolInfo {
    id: "developer",
    name: "Developer Profile",
    description: "About the developer and app information",
    route: "developer",
};

pub struct ToolRegistry {
    tools: Vec<ToolInfo>,
}

impl ToolRegistry {
    pub fn builtin() -> Self {
        Self {
            tools: vec![
                DEVELOPER_PROFILE_INFO,
                EmailComposer::INFO,
                TextSummarizer::INFO,
                HashtagGenerator::INFO,
                IMAGE_INFO,
                GitHubAnalyzer::INFO,
                CodeAssistant::INFO,
                PromptEnhancer::INFO,
                BlogGenerator::INFO,
                StoryPlotGenerator::INFO,
                RecipeGenerator::INFO,
                LanguageTutor::INFO,
                CHAT_INFO,
                PresentationGenerator::INFO,
            ],
        }
    }

    pub fn all(&self) -> &[ToolInfo] {
        &self.tools
    }

    pub fn get(&self, id: &str) -> Option<&ToolInfo> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn by_route(&self, route: &str) -> Option<&ToolInfo> {
        self.tools.iter().find(|t| t.route == route)
    }

    pub fn needs_credential(info: &ToolInfo) -> bool {
        info.id != DEVELOPER_PROFILE_INFO.id
    }

    /// Tools that can be opened with `credential`. Without one only the
    /// developer profile is available.
    pub fn available(&self, credential: Option<&str>) -> Vec<ToolInfo> {
        let has_credential = credential.is_some_and(|c| !c.trim().is_empty());
        self.tools
            .iter()
            .filter(|t| has_credential || !Self::needs_credential(t))
            .copied()
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
