use shared::tool::ToolInfo;

use crate::controller::{require_non_blank, PromptTool};

/// What to analyze. Unknown labels fall back to a one-line profile request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GitHubAnalysis {
    #[default]
    Profile,
    Repository,
    Other(String),
}

impl From<&str> for GitHubAnalysis {
    fn from(label: &str) -> Self {
        match label {
            "profile" => GitHubAnalysis::Profile,
            "repository" => GitHubAnalysis::Repository,
            other => GitHubAnalysis::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GitHubRequest {
    pub username: String,
    pub analysis: GitHubAnalysis,
    /// Repository name, used by [`GitHubAnalysis::Repository`]
    pub repository: String,
}

impl GitHubRequest {
    pub fn profile(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn repository(username: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            analysis: GitHubAnalysis::Repository,
            repository: repository.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GitHubAnalyzer;

impl PromptTool for GitHubAnalyzer {
    type Request = GitHubRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "github",
        name: "GitHub Analytics",
        description: "Analyze GitHub profiles",
        route: "github",
    };

    fn validate(&self, r: &GitHubRequest) -> Result<(), String> {
        require_non_blank(&r.username, "Please enter a GitHub username")
    }

    fn build_prompt(&self, r: &GitHubRequest) -> String {
        match &r.analysis {
            GitHubAnalysis::Profile => format!(
                r#"Analyze the GitHub profile for user: {username}

Please provide a comprehensive analysis including:
- Overall profile assessment
- Main technologies and languages used
- Activity patterns and contribution trends
- Notable projects and contributions
- Suggestions for profile improvement

Format the response in a clear, structured way."#,
                username = r.username,
            ),
            GitHubAnalysis::Repository => format!(
                r#"Analyze the GitHub repository: {username}/{repository}

Please provide a detailed analysis including:
- Project overview and purpose
- Code quality and structure assessment
- Documentation quality
- Activity and maintenance status
- Notable features and potential improvements

Format the response in a clear, structured way."#,
                username = r.username,
                repository = r.repository,
            ),
            GitHubAnalysis::Other(_) => format!("Analyze the GitHub profile: {}", r.username),
        }
    }
}
