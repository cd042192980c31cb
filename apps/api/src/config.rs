use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub ai_match_url: String,
    pub seed_demo_data: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jwt_secret: validate_secret(require_env("JWT_SECRET")?)?,
            jwt_ttl_hours: parse_ttl_hours(
                &std::env::var("JWT_TTL_HOURS").unwrap_or_else(|_| "24".to_string()),
            )?,
            ai_match_url: std::env::var("AI_MATCH_URL")
                .unwrap_or_else(|_| "http://localhost:8000/match".to_string()),
            seed_demo_data: parse_flag(
                &std::env::var("SEED_DEMO_DATA").unwrap_or_else(|_| "true".to_string()),
            )
            .context("SEED_DEMO_DATA must be true or false")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Longest accepted token lifetime (one year).
const MAX_JWT_TTL_HOURS: i64 = 24 * 366;

fn validate_secret(secret: String) -> Result<String> {
    if secret.trim().is_empty() {
        anyhow::bail!("JWT_SECRET must not be empty");
    }
    Ok(secret)
}

fn parse_ttl_hours(value: &str) -> Result<i64> {
    let hours = value
        .trim()
        .parse::<i64>()
        .context("JWT_TTL_HOURS must be a whole number of hours")?;
    if !(1..=MAX_JWT_TTL_HOURS).contains(&hours) {
        anyhow::bail!("JWT_TTL_HOURS must be between 1 and {MAX_JWT_TTL_HOURS}");
    }
    Ok(hours)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" yes ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("off").unwrap());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(validate_secret(String::new()).is_err());
        assert!(validate_secret("   ".to_string()).is_err());
        assert_eq!(validate_secret("s3cret".to_string()).unwrap(), "s3cret");
    }

    #[test]
    fn test_ttl_hours_bounded() {
        assert_eq!(parse_ttl_hours("24").unwrap(), 24);
        assert!(parse_ttl_hours("0").is_err());
        assert!(parse_ttl_hours("-5").is_err());
        assert!(parse_ttl_hours("9223372036854775807").is_err());
        assert!(parse_ttl_hours("soon").is_err());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
    }
}
