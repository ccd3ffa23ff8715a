//! Tool Host - request orchestration for the AI tools
//!
//! This crate drives every tool against the generation client:
//! - A generic controller that validates input, builds a prompt and
//!   publishes the model's answer as observable state
//! - Prompt templates for each text tool
//! - A chat controller that replays the conversation into each prompt
//! - An image analyzer that sends the selected image to the vision model
//! - The catalog of tools for a front-end to list

pub mod chat;
pub mod controller;
pub mod image;
pub mod registry;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use chat::ChatController;
pub use controller::{PromptTool, ToolController, ToolCore};
pub use image::{ImageAnalysis, ImageAnalyzerController};
pub use providers::gemini::Generator;
pub use registry::ToolRegistry;
pub use shared::tool::{GenerationError, ToolError, ToolInfo, ToolState};
