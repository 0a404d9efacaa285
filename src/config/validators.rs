//! Configuration validation
//!
//! The static configuration is checked at startup; any problem stops the
//! server from starting.

use super::StaticConfig;
use crate::utils::url_validator::validate_url;

/// Check the loaded configuration for values the server cannot run with
///
/// Returns every problem found, not just the first one.
pub fn validate_static_config(config: &StaticConfig) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if config.server.port == 0 && config.server.unix_socket.is_none() {
        problems.push("server.port must be non-zero".to_string());
    }

    if let Err(e) = validate_url(&config.api.base_url) {
        problems.push(format!("api.base_url: {}", e));
    }

    if config.api.timeout_secs == 0 {
        problems.push("api.timeout_secs must be at least 1".to_string());
    }

    if let Some(public_url) = &config.site.public_url
        && let Err(e) = validate_url(public_url)
    {
        problems.push(format!("site.public_url: {}", e));
    }

    if config.contact.max_attachment_mb == 0 {
        problems.push("contact.max_attachment_mb must be at least 1".to_string());
    }

    if !matches!(config.logging.format.as_str(), "text" | "json") {
        problems.push(format!(
            "logging.format: unsupported value '{}'. Valid: text, json",
            config.logging.format
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_static_config(&StaticConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_problems() {
        let mut cfg = StaticConfig::default();
        cfg.server.port = 0;
        cfg.api.base_url = "ftp://files.example.com".to_string();
        cfg.logging.format = "xml".to_string();

        let problems = validate_static_config(&cfg).unwrap_err();
        assert_eq!(problems.len(), 3);
        assert!(problems[1].starts_with("api.base_url"));
    }
}
