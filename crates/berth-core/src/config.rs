use berth_model::SizingDefaults;
use berth_model::constants::{DEFAULT_PUBLIC_IMAGE, DEFAULT_VERSION_SENTINEL};

use crate::error::CoreError;

/// Fixed inputs of a [`crate::TaskConfigurationResolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Repository that versioned images are pulled from (e.g. an ECR repository URI).
    pub repository: String,
    /// Selector value that picks `public_image` instead of a repository tag.
    pub default_version_sentinel: String,
    /// Placeholder image used for the sentinel selector.
    pub public_image: String,
    /// Values for unset sizing fields.
    pub sizing: SizingDefaults,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            repository: String::new(),
            default_version_sentinel: DEFAULT_VERSION_SENTINEL.to_string(),
            public_image: DEFAULT_PUBLIC_IMAGE.to_string(),
            sizing: SizingDefaults::default(),
        }
    }
}

impl ResolverConfig {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Default::default()
        }
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.default_version_sentinel = sentinel.into();
        self
    }

    pub fn with_public_image(mut self, image: impl Into<String>) -> Self {
        self.public_image = image.into();
        self
    }

    pub fn with_sizing(mut self, sizing: SizingDefaults) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.repository.trim().is_empty() {
            return Err(CoreError::InvalidConfig("repository is empty".into()));
        }
        if self.default_version_sentinel.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "default version sentinel is empty".into(),
            ));
        }
        if self.public_image.trim().is_empty() {
            return Err(CoreError::InvalidConfig("public image is empty".into()));
        }
        Ok(())
    }
}
