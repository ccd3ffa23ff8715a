use shared::tool::ToolInfo;

use crate::controller::PromptTool;

#[derive(Debug, Clone)]
pub struct StoryPlotRequest {
    pub genre: String,
    pub themes: Vec<String>,
    pub setting: String,
    pub character_count: u32,
    pub complexity: String,
    pub additional_requirements: String,
}

impl StoryPlotRequest {
    pub fn new(genre: impl Into<String>, themes: Vec<String>) -> Self {
        Self {
            genre: genre.into(),
            themes,
            setting: String::new(),
            character_count: 3,
            complexity: "medium".to_string(),
            additional_requirements: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StoryPlotGenerator;

impl PromptTool for StoryPlotGenerator {
    type Request = StoryPlotRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "story_plot",
        name: "Story Plot Generator",
        description: "Create unique story plots and characters",
        route: "story",
    };

    fn validate(&self, r: &StoryPlotRequest) -> Result<(), String> {
        if r.themes.is_empty() {
            return Err("Please select at least one theme".to_string());
        }
        Ok(())
    }

    fn build_prompt(&self, r: &StoryPlotRequest) -> String {
        format!(
            r#"As a master storyteller, create a unique and engaging story plot with the following elements:

Genre: {genre}
Themes: {themes}
Setting: {setting}
Number of Main Characters: {characters}
Complexity Level: {complexity}
Additional Requirements: {additional}

Please provide:
1. Story Title
2. High-Level Plot Summary (2-3 paragraphs)
3. Main Characters Overview
- Brief descriptions and roles
- Key relationships and conflicts
4. Plot Structure
- Setup/Inciting Incident
- Major Plot Points
- Climax Elements
- Resolution Ideas
5. Unique Story Elements
- Plot twists or unexpected elements
- Thematic symbolism
- Key scenes or moments

Make the story:
- Original and engaging
- Logically structured
- Emotionally resonant
- Thematically coherent
- Suitable for the specified genre

Complexity guide:
- Simple: Clear, linear plot with straightforward conflicts
- Medium: Multiple subplots and character arcs
- Complex: Intricate plot layers, multiple timelines, or complex character relationships

Format the response with clear sections and proper markdown."#,
            genre = r.genre,
            themes = r.themes.join(", "),
            setting = r.setting,
            characters = r.character_count,
            complexity = r.complexity,
            additional = r.additional_requirements,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_required() {
        assert_eq!(
            StoryPlotGenerator.validate(&StoryPlotRequest::new("Sci-fi", vec![])),
            Err("Please select at least one theme".to_string())
        );
    }

    #[test]
    fn test_themes_joined() {
        let request = StoryPlotRequest {
            setting: "a generation ship".into(),
            ..StoryPlotRequest::new("Sci-fi", vec!["loyalty".into(), "memory".into()])
        };
        let prompt = StoryPlotGenerator.build_prompt(&request);
        assert!(prompt.contains("Themes: loyalty, memory"));
        assert!(prompt.contains("Setting: a generation ship"));
        assert!(prompt.contains("Number of Main Characters: 3"));
        assert!(prompt.contains("Complexity Level: medium"));
    }
}
