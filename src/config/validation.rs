//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (pattern navigators are declared)
//! - Validate value ranges (max_depth > 0, names non-empty)
//! - Detect duplicate feature names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Manifest → Result<(), Vec<ValidationError>>
//! - Runs before the manifest is accepted; feature content is checked later
//!   by the route aspect itself

use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::schema::Manifest;

/// A single semantic problem in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("aspect name must not be empty")]
    EmptyAspectName,

    #[error("aspect max_depth must be greater than zero")]
    ZeroDepth,

    #[error("feature name must not be empty (feature #{0})")]
    EmptyFeatureName(usize),

    #[error("duplicate feature name `{0}`")]
    DuplicateFeature(String),

    #[error("component name must not be empty")]
    EmptyComponentName,

    #[error("navigation pattern uses undeclared navigator `{0}`")]
    UnknownNavigator(String),
}

/// Validate a parsed manifest.
pub fn validate_manifest(manifest: &Manifest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if manifest.aspect.name.trim().is_empty() {
        errors.push(ValidationError::EmptyAspectName);
    }
    if manifest.aspect.max_depth == 0 {
        errors.push(ValidationError::ZeroDepth);
    }

    let mut seen = BTreeSet::new();
    for (index, feature) in manifest.features.iter().enumerate() {
        if feature.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFeatureName(index));
        } else if !seen.insert(feature.name.as_str()) {
            errors.push(ValidationError::DuplicateFeature(feature.name.clone()));
        }
    }

    if manifest.components.iter().any(|c| c.trim().is_empty()) {
        errors.push(ValidationError::EmptyComponentName);
    }

    if let Some(pattern) = &manifest.pattern {
        let declared: BTreeSet<&str> = manifest.navigators.iter().map(String::as_str).collect();
        let mut reported = BTreeSet::new();
        for name in pattern.navigator_names() {
            if !declared.contains(name) && reported.insert(name) {
                errors.push(ValidationError::UnknownNavigator(name.to_string()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
