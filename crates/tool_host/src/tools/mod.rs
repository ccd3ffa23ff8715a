//! Prompt-template tools.
//!
//! Each tool is a [`PromptTool`](crate::controller::PromptTool) with its own
//! request type; the aliases below pair it with the generic controller.

pub mod blog;
pub mod code_assistant;
pub mod email;
pub mod github;
pub mod hashtags;
pub mod language;
pub mod presentation;
pub mod prompt_enhancer;
pub mod recipe;
pub mod story_plot;
pub mod summarizer;

pub use blog::{BlogGenerator, BlogLength, BlogRequest};
pub use code_assistant::{CodeAssistant, CodeHelp, CodeHelpRequest};
pub use email::{EmailComposer, EmailRequest};
pub use github::{GitHubAnalysis, GitHubAnalyzer, GitHubRequest};
pub use hashtags::{HashtagGenerator, HashtagRequest};
pub use language::{LanguageLessonRequest, LanguageTutor, LearningType};
pub use presentation::{PresentationGenerator, PresentationRequest};
pub use prompt_enhancer::{EnhanceRequest, PromptEnhancer};
pub use recipe::{RecipeGenerator, RecipeRequest};
pub use story_plot::{StoryPlotGenerator, StoryPlotRequest};
pub use summarizer::{SummaryLength, SummaryRequest, TextSummarizer};

use crate::controller::ToolController;

pub type BlogController = ToolController<BlogGenerator>;
pub type CodeAssistantController = ToolController<CodeAssistant>;
pub type EmailController = ToolController<EmailComposer>;
pub type GitHubController = ToolController<GitHubAnalyzer>;
pub type HashtagController = ToolController<HashtagGenerator>;
pub type LanguageController = ToolController<LanguageTutor>;
pub type PresentationController = ToolController<PresentationGenerator>;
pub type PromptEnhancerController = ToolController<PromptEnhancer>;
pub type RecipeController = ToolController<RecipeGenerator>;
pub type StoryPlotController = ToolController<StoryPlotGenerator>;
pub type SummarizerController = ToolController<TextSummarizer>;
