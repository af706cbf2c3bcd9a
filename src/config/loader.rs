//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate settings from a TOML document.
pub fn parse_config(content: &str) -> Result<RouterSettings, ConfigError> {
    let settings: RouterSettings = toml::from_str(content)?;
    validate_settings(&settings).map_err(ConfigError::Validation)?;
    Ok(settings)
}

/// Load and validate settings from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        routes = settings.routes.len(),
        "Router configuration loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
mode = "history"
base = "app"

[[routes]]
path = "/"
view = "Home"
name = "home"

[[routes]]
path = "/users/:id"
view = "User"
"#;

    #[test]
    fn test_parse_sample() {
        let settings = parse_config(SAMPLE).unwrap();
        assert_eq!(settings.mode.as_deref(), Some("history"));
        assert_eq!(settings.base, "app");
        assert_eq!(settings.mount_target, "router-outlet");
        assert_eq!(settings.routes.len(), 2);
        assert_eq!(settings.routes[0].name.as_deref(), Some("home"));
        assert_eq!(settings.routes[1].name, None);
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = parse_config("").unwrap();
        assert!(settings.mode.is_none());
        assert!(settings.routes.is_empty());
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_config("routes = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = parse_config("routes = \"not a list\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[[routes]]\npath = \"users\"\nview = \"U\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("must start with `/`"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("easyroute_loader_test.toml");
        fs::write(&path, SAMPLE).unwrap();

        let settings = load_config(&path).unwrap();
        assert_eq!(settings.routes.len(), 2);

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
