use anyhow::{ensure, Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GOOGLE_API_BASE: &str = "https://www.googleapis.com";
pub const DEFAULT_EXTRACT_CHAR_CAP: usize = 4000;
pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration loaded from environment variables.
///
/// Every third-party credential is optional: a missing key degrades the
/// matching endpoint to its fallback content and shows up as `missing` in
/// `/health`, it never stops the service from starting.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub google_api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub google_search_api_base: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_base: String,
    /// Empty means permissive CORS.
    pub allowed_origins: Vec<String>,
    pub extract_char_cap: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            google_api_key: optional_env("GOOGLE_API_KEY"),
            search_engine_id: optional_env("SEARCH_ENGINE_ID"),
            google_search_api_base: optional_env("GOOGLE_SEARCH_API_BASE")
                .unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_string()),
            youtube_api_key: optional_env("YOUTUBE_API_KEY"),
            youtube_api_base: optional_env("YOUTUBE_API_BASE")
                .unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_string()),
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            extract_char_cap: match optional_env("EXTRACT_CHAR_CAP") {
                Some(v) => parse_char_cap(&v)?,
                None => DEFAULT_EXTRACT_CHAR_CAP,
            },
            port: match optional_env("PORT") {
                Some(v) => parse_port(&v)?,
                None => DEFAULT_PORT,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_char_cap(raw: &str) -> Result<usize> {
    let cap = raw
        .parse::<usize>()
        .context("EXTRACT_CHAR_CAP must be a positive integer")?;
    ensure!(cap > 0, "EXTRACT_CHAR_CAP must be greater than zero");
    Ok(cap)
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>().context("PORT must be a valid port number")
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
impl Config {
    /// Config with no credentials and every upstream pointed at a closed port.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            google_api_key: None,
            search_engine_id: None,
            google_search_api_base: "http://127.0.0.1:9".to_string(),
            youtube_api_key: None,
            youtube_api_base: "http://127.0.0.1:9".to_string(),
            allowed_origins: Vec::new(),
            extract_char_cap: DEFAULT_EXTRACT_CHAR_CAP,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_trailing_slash() {
        let origins = parse_origins(" https://skill-up.example.app/ ,http://localhost:5173,, ");
        assert_eq!(
            origins,
            vec![
                "https://skill-up.example.app".to_string(),
                "http://localhost:5173".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_char_cap() {
        assert_eq!(parse_char_cap("3000").unwrap(), 3000);
        assert!(parse_char_cap("0").is_err());
        assert!(parse_char_cap("lots").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_blank_env_value_counts_as_unset() {
        std::env::set_var("SKILLUP_CONFIG_TEST_BLANK", "   ");
        std::env::set_var("SKILLUP_CONFIG_TEST_PADDED", " 9000 ");
        assert_eq!(optional_env("SKILLUP_CONFIG_TEST_BLANK"), None);
        assert_eq!(
            optional_env("SKILLUP_CONFIG_TEST_PADDED").as_deref(),
            Some("9000")
        );
        assert_eq!(optional_env("SKILLUP_CONFIG_TEST_NEVER_SET"), None);
    }
}
