use shared::tool::ToolInfo;

use crate::controller::PromptTool;

#[derive(Debug, Clone, Default)]
pub struct EmailRequest {
    pub recipient: String,
    pub subject: String,
    pub tone: String,
    pub key_points: String,
}

/// Drafts an email. Has no precondition; every request is sent.
#[derive(Debug, Default)]
pub struct EmailComposer;

impl PromptTool for EmailComposer {
    type Request = EmailRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "email",
        name: "Email Composer",
        description: "Write professional emails with AI assistance",
        route: "email",
    };

    fn build_prompt(&self, r: &EmailRequest) -> String {
        format!(
            r#"Write a professional email with the following details:
To: {recipient}
Subject: {subject}
Tone: {tone}
Key Points to Include: {key_points}

Please format the email professionally and ensure it's concise and effective."#,
            recipient = r.recipient,
            subject = r.subject,
            tone = r.tone,
            key_points = r.key_points,
        )
    }
}
