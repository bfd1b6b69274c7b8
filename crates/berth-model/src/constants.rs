//! Common model-level constants.
//!
//! Defaults applied when a task configuration leaves a field unset.
//! They are plain values: the resolver receives them explicitly through its configuration.

/// Image selector value that picks [`DEFAULT_PUBLIC_IMAGE`] instead of a versioned image.
pub const DEFAULT_VERSION_SENTINEL: &str = "default";

/// Public placeholder image used when no version is selected.
pub const DEFAULT_PUBLIC_IMAGE: &str = "amazon/amazon-ecs-sample";

/// Memory hard limit in MiB.
pub const DEFAULT_MEMORY_LIMIT_MIB: u32 = 512;

/// CPU units (1024 = one vCPU).
pub const DEFAULT_CPU: u32 = 256;

/// Number of running task instances.
pub const DEFAULT_DESIRED_COUNT: u32 = 1;

/// Grace period before load balancer health checks count against a new task.
pub const DEFAULT_HEALTH_CHECK_GRACE_PERIOD_SECS: u64 = 60;
