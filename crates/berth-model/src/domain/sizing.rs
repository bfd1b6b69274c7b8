use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::TaskConfig;
use crate::constants::{
    DEFAULT_CPU, DEFAULT_DESIRED_COUNT, DEFAULT_HEALTH_CHECK_GRACE_PERIOD_SECS,
    DEFAULT_MEMORY_LIMIT_MIB,
};

/// Fully resolved resource sizing of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sizing {
    #[serde(rename = "memoryLimitMiB")]
    pub memory_limit_mib: u32,
    pub cpu: u32,
    pub desired_count: u32,
    #[serde(rename = "healthCheckGracePeriodSeconds", with = "secs")]
    pub health_check_grace_period: Duration,
}

impl Sizing {
    #[inline]
    pub fn health_check_grace_period_secs(&self) -> u64 {
        self.health_check_grace_period.as_secs()
    }
}

impl Default for Sizing {
    fn default() -> Self {
        SizingDefaults::default().as_sizing()
    }
}

/// Values substituted for unset sizing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingDefaults {
    pub memory_limit_mib: u32,
    pub cpu: u32,
    pub desired_count: u32,
    pub health_check_grace_period: Duration,
}

impl Default for SizingDefaults {
    fn default() -> Self {
        Self {
            memory_limit_mib: DEFAULT_MEMORY_LIMIT_MIB,
            cpu: DEFAULT_CPU,
            desired_count: DEFAULT_DESIRED_COUNT,
            health_check_grace_period: Duration::from_secs(DEFAULT_HEALTH_CHECK_GRACE_PERIOD_SECS),
        }
    }
}

impl SizingDefaults {
    fn as_sizing(&self) -> Sizing {
        Sizing {
            memory_limit_mib: self.memory_limit_mib,
            cpu: self.cpu,
            desired_count: self.desired_count,
            health_check_grace_period: self.health_check_grace_period,
        }
    }

    /// Merge a task configuration over these defaults.
    ///
    /// - `memoryLimitMiB` and `cpu`: unset or `0` → default (a zero-sized task is never valid).
    /// - `desiredCount`: unset → default; an explicit `0` is kept (scale to zero).
    /// - `healthCheckGracePeriod`: unset → default; an explicit zero duration is kept.
    pub fn apply(&self, config: &TaskConfig) -> Sizing {
        Sizing {
            memory_limit_mib: non_zero_or(config.memory_limit_mib, self.memory_limit_mib),
            cpu: non_zero_or(config.cpu, self.cpu),
            desired_count: config.desired_count.unwrap_or(self.desired_count),
            health_check_grace_period: config
                .health_check_grace_period
                .unwrap_or(self.health_check_grace_period),
        }
    }
}

#[inline]
fn non_zero_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v != 0).unwrap_or(default)
}

/// Whole seconds on the wire.
pub(crate) mod secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        d.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Optional whole seconds on the wire.
pub(crate) mod opt_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match d {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_all_defaults() {
        let sizing = SizingDefaults::default().apply(&TaskConfig::default());

        assert_eq!(sizing.memory_limit_mib, 512);
        assert_eq!(sizing.cpu, 256);
        assert_eq!(sizing.desired_count, 1);
        assert_eq!(sizing.health_check_grace_period_secs(), 60);
        assert_eq!(sizing, Sizing::default());
    }

    #[test]
    fn explicit_cpu_kept_others_default() {
        let cfg = TaskConfig {
            cpu: Some(1024),
            ..Default::default()
        };
        let sizing = SizingDefaults::default().apply(&cfg);

        assert_eq!(sizing.cpu, 1024);
        assert_eq!(sizing.memory_limit_mib, 512);
        assert_eq!(sizing.desired_count, 1);
        assert_eq!(sizing.health_check_grace_period_secs(), 60);
    }

    #[test]
    fn zero_memory_and_cpu_fall_back() {
        let cfg = TaskConfig {
            memory_limit_mib: Some(0),
            cpu: Some(0),
            ..Default::default()
        };
        let sizing = SizingDefaults::default().apply(&cfg);

        assert_eq!(sizing.memory_limit_mib, 512);
        assert_eq!(sizing.cpu, 256);
    }

    #[test]
    fn zero_desired_count_is_scale_to_zero() {
        let cfg = TaskConfig {
            desired_count: Some(0),
            ..Default::default()
        };
        assert_eq!(SizingDefaults::default().apply(&cfg).desired_count, 0);
    }

    #[test]
    fn explicit_grace_period_kept() {
        let cfg = TaskConfig {
            health_check_grace_period: Some(Duration::from_secs(0)),
            ..Default::default()
        };
        let sizing = SizingDefaults::default().apply(&cfg);
        assert_eq!(sizing.health_check_grace_period, Duration::ZERO);
    }

    #[test]
    fn custom_defaults_are_used() {
        let defaults = SizingDefaults {
            memory_limit_mib: 2048,
            cpu: 1024,
            desired_count: 3,
            health_check_grace_period: Duration::from_secs(120),
        };
        let sizing = defaults.apply(&TaskConfig::default());

        assert_eq!(sizing.memory_limit_mib, 2048);
        assert_eq!(sizing.cpu, 1024);
        assert_eq!(sizing.desired_count, 3);
        assert_eq!(sizing.health_check_grace_period_secs(), 120);
    }

    #[test]
    fn sizing_serializes_seconds() {
        let json = serde_json::to_value(Sizing::default()).unwrap();
        assert_eq!(json["memoryLimitMiB"], 512);
        assert_eq!(json["cpu"], 256);
        assert_eq!(json["desiredCount"], 1);
        assert_eq!(json["healthCheckGracePeriodSeconds"], 60);
    }
}
