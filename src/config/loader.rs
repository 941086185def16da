//! Manifest loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::Manifest;
use crate::config::validation::{validate_manifest, ValidationError};

/// Error type for manifest loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse and validate a manifest from TOML text.
pub fn parse_manifest(content: &str) -> Result<Manifest, ConfigError> {
    let manifest: Manifest = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_manifest(&manifest).map_err(ConfigError::Validation)?;

    Ok(manifest)
}

/// Load and validate a manifest from a TOML file.
pub fn load_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let manifest = parse_manifest(&content)?;

    tracing::debug!(
        path = %path.display(),
        features = manifest.features.len(),
        "Manifest loaded"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = parse_manifest("features = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }

    #[test]
    fn test_validation_error_lists_everything() {
        let err = parse_manifest(
            r#"
            [aspect]
            name = ""
            max_depth = 0
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: aspect name must not be empty, aspect max_depth must be greater than zero"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_manifest(Path::new("/definitely/not/here/navtree.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("navtree-loader-{}.toml", std::process::id()));
        fs::write(
            &path,
            r#"
            components = ["Home"]

            [pattern]
            navigator = "stack"
            routes = ["home"]

            [[features]]
            name = "home"
            [features.route.routes.home]
            screen = "Home"
            "#,
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(manifest.components, vec!["Home"]);
        assert_eq!(manifest.features.len(), 1);
        assert!(manifest.pattern.is_some());
    }
}
