//! Clients for the remote services the tools depend on.
//!
//! - `gemini`: text and vision generation against the hosted model
//! - `github`: public profile lookup

pub mod gemini;
pub mod github;

#[cfg(test)]
mod test_support;

pub use gemini::{GeminiClient, Generator};
pub use github::{DeveloperProfile, GitHubClient};

/// Flatten an error and its sources into one line.
pub(crate) fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
