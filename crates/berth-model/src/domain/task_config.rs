use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{ModelError, Secrets, TaskEnv};

/// Resource and runtime parameters of one deployable task.
///
/// Every field is optional; unset values are filled in by [`crate::SizingDefaults::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Memory hard limit in MiB.
    #[serde(rename = "memoryLimitMiB", default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_mib: Option<u32>,
    /// CPU units (1024 = one vCPU).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    /// Number of task instances to keep running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<u32>,
    /// Plain environment variables; `null` reads as empty.
    #[serde(
        default,
        skip_serializing_if = "TaskEnv::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub environment: TaskEnv,
    /// Secret references, `"<secretName>:<fieldName>"` per variable; `null` reads as empty.
    #[serde(
        default,
        skip_serializing_if = "Secrets::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub secrets: Secrets,
    /// Health-check grace period, whole seconds on the wire.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::sizing::opt_secs"
    )]
    pub health_check_grace_period: Option<Duration>,
}

impl TaskConfig {
    /// Parse a JSON task configuration document.
    pub fn from_json(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Copy of this configuration with `overrides` merged over its environment.
    pub fn with_env_overrides(&self, overrides: &TaskEnv) -> Self {
        Self {
            environment: self.environment.merged(overrides),
            ..self.clone()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretRef;

    #[test]
    fn empty_document_is_all_unset() {
        let cfg = TaskConfig::from_json("{}").unwrap();
        assert_eq!(cfg, TaskConfig::default());
        assert!(cfg.environment.is_empty());
        assert!(cfg.secrets.is_empty());
    }

    #[test]
    fn full_document_parses() {
        let json = r#"
        {
          "memoryLimitMiB": 1024,
          "cpu": 512,
          "desiredCount": 2,
          "environment": { "NODE_ENV": "production" },
          "secrets": { "DB_PASS": "db-credentials:password", "API_KEY": "" },
          "healthCheckGracePeriod": 90
        }"#;

        let cfg = TaskConfig::from_json(json).unwrap();
        assert_eq!(cfg.memory_limit_mib, Some(1024));
        assert_eq!(cfg.cpu, Some(512));
        assert_eq!(cfg.desired_count, Some(2));
        assert_eq!(cfg.environment.get("NODE_ENV"), Some("production"));
        assert_eq!(cfg.health_check_grace_period, Some(Duration::from_secs(90)));

        let secrets = cfg.secrets.resolve();
        assert_eq!(secrets.len(), 1);
        assert_eq!(
            secrets["DB_PASS"],
            SecretRef::new("db-credentials", "password")
        );
    }

    #[test]
    fn null_maps_read_as_empty() {
        let cfg = TaskConfig::from_json(
            r#"{ "environment": null, "secrets": null, "cpu": null, "healthCheckGracePeriod": null }"#,
        )
        .unwrap();

        assert_eq!(cfg, TaskConfig::default());
        assert!(cfg.secrets.resolve().is_empty());
    }

    #[test]
    fn null_secret_value_is_skipped() {
        let cfg = TaskConfig::from_json(r#"{ "secrets": { "A": "s:f", "X": null } }"#).unwrap();
        let secrets = cfg.secrets.resolve();

        assert_eq!(secrets.len(), 1);
        assert_eq!(secrets["A"], SecretRef::new("s", "f"));
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = TaskConfig::from_json(r#"{ "cpu": "lots" }"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let cfg = TaskConfig {
            cpu: Some(1024),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"cpu":1024}"#);

        let back = TaskConfig::from_json_slice(json.as_bytes()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn env_overrides_merge_over_base() {
        let cfg = TaskConfig {
            environment: [("LOG_LEVEL", "info"), ("REGION", "eu-west-1")]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        let out = cfg.with_env_overrides(&TaskEnv::single("LOG_LEVEL", "debug"));
        assert_eq!(out.environment.get("LOG_LEVEL"), Some("debug"));
        assert_eq!(out.environment.get("REGION"), Some("eu-west-1"));
        assert_eq!(cfg.environment.get("LOG_LEVEL"), Some("info"));
    }
}
