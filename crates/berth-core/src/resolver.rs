//! Task configuration resolution.
//!
//! Turns a [`TaskConfig`] plus an image-version flag into a [`ResolvedTask`]:
//! - secret references are parsed into [`SecretRef`]s (empty values dropped, never an error);
//! - the version flag picks either the public placeholder image or a repository tag;
//! - unset sizing fields receive the configured defaults.
//!
//! All operations are pure; the only side effect is `tracing` output.
use std::collections::BTreeMap;

use berth_model::{EnvKey, ImageRef, ImageSelector, SecretRef, Secrets, Sizing, TaskConfig};
use tracing::{debug, instrument, trace};

use crate::{config::ResolverConfig, error::CoreError, resolved::ResolvedTask};

#[derive(Debug, Clone)]
pub struct TaskConfigurationResolver {
    cfg: ResolverConfig,
}

impl TaskConfigurationResolver {
    /// Build a resolver after validating `cfg`.
    pub fn new(cfg: ResolverConfig) -> Result<Self, CoreError> {
        cfg.validate()?;
        debug!(
            repository = %cfg.repository,
            sentinel = %cfg.default_version_sentinel,
            "task configuration resolver ready"
        );
        Ok(Self { cfg })
    }

    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.cfg
    }

    /// Parse every non-empty secret reference.
    ///
    /// `None` is treated as an empty map.
    pub fn resolve_secrets(&self, secrets: Option<&Secrets>) -> BTreeMap<EnvKey, SecretRef> {
        let out = secrets.map(Secrets::resolve).unwrap_or_default();
        trace!(
            input = secrets.map_or(0, Secrets::len),
            resolved = out.len(),
            "secrets resolved"
        );
        out
    }

    /// Pick the container image for a version flag.
    pub fn resolve_image(&self, version_selector: &str) -> ImageRef {
        ImageSelector::parse(version_selector, &self.cfg.default_version_sentinel)
            .resolve(&self.cfg.repository, &self.cfg.public_image)
    }

    /// Apply sizing defaults to `config`.
    pub fn resolve_sizing(&self, config: &TaskConfig) -> Sizing {
        self.cfg.sizing.apply(config)
    }

    /// Resolve a whole task configuration.
    #[instrument(level = "debug", skip(self, config), fields(selector = %version_selector))]
    pub fn resolve(&self, config: &TaskConfig, version_selector: &str) -> ResolvedTask {
        let image = self.resolve_image(version_selector);
        let sizing = self.resolve_sizing(config);
        let secrets = self.resolve_secrets(Some(&config.secrets));

        debug!(
            image = %image,
            image_kind = image.kind(),
            cpu = sizing.cpu,
            memory_mib = sizing.memory_limit_mib,
            desired_count = sizing.desired_count,
            env = config.environment.len(),
            secrets = secrets.len(),
            "task configuration resolved"
        );

        ResolvedTask {
            image,
            sizing,
            environment: config.environment.clone(),
            secrets,
        }
    }

    /// Parse a JSON task configuration and resolve it.
    pub fn resolve_json(&self, doc: &str, version_selector: &str) -> Result<ResolvedTask, CoreError> {
        let config = TaskConfig::from_json(doc)?;
        Ok(self.resolve(&config, version_selector))
    }
}
