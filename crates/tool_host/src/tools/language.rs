use shared::tool::ToolInfo;

use crate::controller::PromptTool;

/// Kind of lesson. Unknown labels get a mixed-practice block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LearningType {
    #[default]
    Conversation,
    Vocabulary,
    Grammar,
    Exercises,
    Other(String),
}

impl LearningType {
    pub fn label(&self) -> &str {
        match self {
            LearningType::Conversation => "conversation",
            LearningType::Vocabulary => "vocabulary",
            LearningType::Grammar => "grammar",
            LearningType::Exercises => "exercises",
            LearningType::Other(label) => label,
        }
    }

    fn outline(&self) -> &'static str {
        match self {
            LearningType::Conversation => {
                "1. A dialogue scenario with:
- Natural conversation flow
- Common expressions and idioms
- Cultural context notes
- Pronunciation tips
- Alternative phrases
- Grammar explanations for key structures"
            }
            LearningType::Vocabulary => {
                "1. A themed vocabulary list with:
- Words and phrases in context
- Example sentences
- Common collocations
- Usage notes
- Memory tips
- Related expressions"
            }
            LearningType::Grammar => {
                "1. Grammar explanation with:
- Clear rules and patterns
- Multiple examples
- Common mistakes to avoid
- Practice exercises
- Usage in different contexts
- Comparison with English structures"
            }
            LearningType::Exercises => {
                "1. A set of exercises including:
- Fill in the blanks
- Sentence construction
- Translation practice
- Error correction
- Situation responses
- Answers with explanations"
            }
            LearningType::Other(_) => {
                "1. Mixed practice content with:
- Key phrases and vocabulary
- Simple dialogues
- Basic grammar points
- Cultural notes"
            }
        }
    }
}

impl From<&str> for LearningType {
    fn from(label: &str) -> Self {
        match label {
            "conversation" => LearningType::Conversation,
            "vocabulary" => LearningType::Vocabulary,
            "grammar" => LearningType::Grammar,
            "exercises" => LearningType::Exercises,
            other => LearningType::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageLessonRequest {
    pub target_language: String,
    pub proficiency: String,
    pub learning: LearningType,
    /// Blank means general conversation
    pub topic: String,
    /// Blank means everyday situations
    pub context: String,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Builds lessons for a target language. Has no precondition.
#[derive(Debug, Default)]
pub struct LanguageTutor;

impl PromptTool for LanguageTutor {
    type Request = LanguageLessonRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "language",
        name: "Language Learning",
        description: "AI-powered language learning assistant",
        route: "language",
    };

    fn build_prompt(&self, r: &LanguageLessonRequest) -> String {
        format!(
            r#"As a language learning expert, create educational content for:

Target Language: {language}
Proficiency Level: {proficiency}
Type of Learning: {learning}
Topic: {topic}
Context: {context}

Based on the learning type, provide:

{outline}

Additional requirements:
- Include pronunciation guides where relevant
- Add cultural context and usage notes
- Provide memory tips and learning strategies
- Include review questions or exercises
- Suggest next learning steps

Format the response with clear sections and proper markdown."#,
            language = r.target_language,
            proficiency = r.proficiency,
            learning = r.learning.label(),
            topic = or_default(&r.topic, "general conversation"),
            context = or_default(&r.context, "everyday situations"),
            outline = r.learning.outline(),
        )
    }
}
