use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing is required: without `OPENAI_API_KEY` evaluations are heuristic only.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    /// Overrides the chat-completions endpoint (proxies, self-hosted gateways).
    pub openai_api_url: Option<String>,
    pub narrative_enabled: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL"),
            narrative_enabled: match optional_env("ENABLE_NARRATIVE_EVALUATION") {
                Some(value) => parse_flag(&value).with_context(|| {
                    format!("ENABLE_NARRATIVE_EVALUATION must be true or false, got '{value}'")
                })?,
                None => true,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
