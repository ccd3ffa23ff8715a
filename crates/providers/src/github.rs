use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::settings::DEFAULT_GITHUB_API_BASE;
use tracing::warn;

/// Public profile details for a GitHub user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    pub location: String,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub profile_url: String,
}

/// Wire shape of `GET /users/{username}`; every field may be null or missing.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    followers: Option<u32>,
    #[serde(default)]
    following: Option<u32>,
    #[serde(default)]
    public_repos: Option<u32>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<GitHubUser> for DeveloperProfile {
    fn from(user: GitHubUser) -> Self {
        Self {
            name: user.name.unwrap_or_default(),
            bio: user.bio.unwrap_or_default(),
            avatar_url: user.avatar_url.unwrap_or_default(),
            location: user.location.unwrap_or_default(),
            followers: user.followers.unwrap_or_default(),
            following: user.following.unwrap_or_default(),
            public_repos: user.public_repos.unwrap_or_default(),
            profile_url: user.html_url.unwrap_or_default(),
        }
    }
}

pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_GITHUB_API_BASE)
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a user's public profile.
    ///
    /// Any failure (unknown user, network, bad JSON) yields an all-default
    /// profile; callers cannot tell those cases apart.
    pub async fn fetch_profile(&self, username: &str) -> DeveloperProfile {
        match self.try_fetch_profile(username.trim()).await {
            Ok(profile) => profile,
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(username, %error, "github profile fetch failed");
                DeveloperProfile::default()
            }
        }
    }

    /// `{api_base}/users/{username}` with the username kept to one path segment.
    fn profile_url(&self, username: &str) -> Result<String> {
        if username.is_empty() || username == "." || username == ".." {
            bail!("invalid github username: {:?}", username);
        }
        Ok(format!(
            "{}/users/{}",
            self.api_base,
            urlencoding::encode(username)
        ))
    }

    async fn try_fetch_profile(&self, username: &str) -> Result<DeveloperProfile> {
        let url = self.profile_url(username)?;
        let resp = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "ai-tools")
            .send()
            .await
            .context("github request failed")?;
        if !resp.status().is_success() {
            return Err(anyhow!("github error: {}", resp.status()));
        }
        let user: GitHubUser = resp
            .json()
            .await
            .context("invalid github profile response")?;
        Ok(user.into())
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;

    #[test]
    fn test_profile_from_partial_user() {
        let user: GitHubUser = serde_json::from_str(
            r#"{"login":"octocat","name":null,"followers":12,"html_url":"https://github.com/octocat"}"#,
        )
        .unwrap();
        let profile = DeveloperProfile::from(user);
        assert_eq!(profile.name, "");
        assert_eq!(profile.followers, 12);
        assert_eq!(profile.public_repos, 0);
        assert_eq!(profile.profile_url, "https://github.com/octocat");
    }

    #[tokio::test]
    async fn test_fetch_profile() {
        let (base_url, server) = serve_once(
            200,
            r#"{"name":"The Octocat","bio":"mascot","avatar_url":"https://a/1.png","location":"San Francisco","followers":100,"following":2,"public_repos":8,"html_url":"https://github.com/octocat"}"#,
        )
        .await;
        let client = GitHubClient::with_api_base(&base_url);

        let profile = client.fetch_profile("octocat").await;
        assert_eq!(profile.name, "The Octocat");
        assert_eq!(profile.location, "San Francisco");
        assert_eq!(profile.public_repos, 8);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /users/octocat"));
        assert!(request
            .to_lowercase()
            .contains("accept: application/vnd.github.v3+json"));
    }

    #[test]
    fn test_username_stays_in_one_path_segment() {
        let client = GitHubClient::with_api_base("http://localhost");

        assert_eq!(
            client.profile_url("a/b").unwrap(),
            "http://localhost/users/a%2Fb"
        );
        assert_eq!(
            client.profile_url("../x").unwrap(),
            "http://localhost/users/..%2Fx"
        );
        assert_eq!(
            client.profile_url("who?tab=repos#top").unwrap(),
            "http://localhost/users/who%3Ftab%3Drepos%23top"
        );
        assert!(client.profile_url("..").is_err());
        assert!(client.profile_url(".").is_err());
    }

    #[tokio::test]
    async fn test_traversal_username_does_not_leave_users_endpoint() {
        let (base_url, server) = serve_once(404, r#"{"message":"Not Found"}"#).await;
        let client = GitHubClient::with_api_base(&base_url);

        let profile = client.fetch_profile("../repos/rust-lang/rust").await;

        assert_eq!(profile, DeveloperProfile::default());
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /users/..%2Frepos%2Frust-lang%2Frust "));
    }

    #[tokio::test]
    async fn test_dot_dot_username_is_never_sent() {
        let client = GitHubClient::with_api_base("http://127.0.0.1:1");
        assert_eq!(client.fetch_profile("..").await, DeveloperProfile::default());
        assert!(client.try_fetch_profile("..").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_user_yields_default_profile() {
        let (base_url, _server) = serve_once(404, r#"{"message":"Not Found"}"#).await;
        let client = GitHubClient::with_api_base(&base_url);
        assert_eq!(
            client.fetch_profile("nobody").await,
            DeveloperProfile::default()
        );
    }
}
