use shared::tool::ToolInfo;

use crate::controller::{require_min_chars, PromptTool};

#[derive(Debug, Clone, Default)]
pub struct PresentationRequest {
    pub topic: String,
    pub audience: String,
    pub duration_minutes: u32,
    pub style: String,
    pub purpose: String,
    pub key_points: String,
}

#[derive(Debug, Default)]
pub struct PresentationGenerator;

impl PromptTool for PresentationGenerator {
    type Request = PresentationRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "presentation",
        name: "Presentation Generator",
        description: "Create professional presentation outlines",
        route: "presentation",
    };

    fn validate(&self, r: &PresentationRequest) -> Result<(), String> {
        require_min_chars(&r.topic, 5, "Topic must be at least 5 characters long")
    }

    fn build_prompt(&self, r: &PresentationRequest) -> String {
        format!(
            r#"As a professional presentation designer, create a comprehensive presentation outline with the following requirements:

Topic: {topic}
Target Audience: {audience}
Duration: {duration} minutes
Presentation Style: {style}
Purpose: {purpose}
Key Points to Include: {key_points}

Please provide:

1. Title Slide
- Engaging title
- Impactful subtitle
- Hook statement

2. Presentation Structure
- Introduction (with attention grabber)
- Main sections with timing allocation
- Conclusion and call to action

3. Content Details for Each Section
- Key messages
- Supporting points
- Data/statistics to include
- Storytelling elements

4. Visual Design Suggestions
- Color scheme recommendations
- Layout ideas for key slides
- Visual elements to include
- Typography recommendations

5. Engagement Elements
- Interactive components
- Questions for audience engagement
- Discussion points
- Activities or exercises

6. Presentation Tips
- Delivery suggestions
- Timing guidelines
- Transition techniques
- Body language recommendations

Additional Requirements:
- Keep content concise and impactful
- Include memorable takeaways
- Balance text and visual elements
- Consider audience attention span
- Incorporate storytelling techniques

Format the response with clear sections and proper markdown for easy reading and implementation."#,
            topic = r.topic,
            audience = r.audience,
            duration = r.duration_minutes,
            style = r.style,
            purpose = r.purpose,
            key_points = r.key_points,
        )
    }
}
