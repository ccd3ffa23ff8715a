pub mod chat;
pub mod tool;

pub mod settings {
    use serde::{Deserialize, Serialize};

    pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

    /// Which hosted models the tools talk to
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ModelSettings {
        pub base_url: String,
        pub text_model: String,   // e.g., "gemini-pro"
        pub vision_model: String, // e.g., "gemini-1.5-flash"
    }

    impl Default for ModelSettings {
        fn default() -> Self {
            Self {
                base_url: DEFAULT_GEMINI_BASE_URL.into(),
                text_model: "gemini-pro".into(),
                vision_model: "gemini-1.5-flash".into(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AppSettings {
        /// User-supplied Gemini API key. Blank is treated as absent.
        #[serde(default)]
        pub gemini_api_key: Option<String>,
        #[serde(default)]
        pub model: ModelSettings,
        #[serde(default = "default_github_api_base")]
        pub github_api_base: String,
    }

    fn default_github_api_base() -> String {
        DEFAULT_GITHUB_API_BASE.to_string()
    }

    impl Default for AppSettings {
        fn default() -> Self {
            Self {
                gemini_api_key: None,
                model: ModelSettings::default(),
                github_api_base: default_github_api_base(),
            }
        }
    }

    impl AppSettings {
        /// The stored credential, with blank values treated as missing.
        pub fn credential(&self) -> Option<&str> {
            self.gemini_api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_blank_credential_is_absent() {
            let mut settings = AppSettings::default();
            assert_eq!(settings.credential(), None);

            settings.gemini_api_key = Some("   ".into());
            assert_eq!(settings.credential(), None);

            settings.gemini_api_key = Some("abc123".into());
            assert_eq!(settings.credential(), Some("abc123"));
        }

        #[test]
        fn test_partial_settings_file_uses_defaults() {
            let settings: AppSettings =
                serde_json::from_str(r#"{"gemini_api_key":"k"}"#).unwrap();
            assert_eq!(settings.model, ModelSettings::default());
            assert_eq!(settings.github_api_base, DEFAULT_GITHUB_API_BASE);
        }
    }
}
