pub mod error;
pub use error::CoreError;

mod config;
pub use config::ResolverConfig;

mod resolved;
pub use resolved::ResolvedTask;

pub mod resolver;
pub use resolver::TaskConfigurationResolver;
