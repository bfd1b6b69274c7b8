mod task_env;
pub use task_env::TaskEnv;

mod secret;
pub use secret::{SecretRef, Secrets};

mod image;
pub use image::{ImageRef, ImageSelector};

mod sizing;
pub use sizing::{Sizing, SizingDefaults};

mod hostname;
pub use hostname::Hostname;

mod task_config;
pub use task_config::TaskConfig;

/// Name of a secret-manager entry (e.g. `"my-secret"`).
pub type SecretName = String;

/// Key of an environment variable or secret inside the container.
pub type EnvKey = String;
