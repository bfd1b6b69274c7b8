mod domain;
pub use domain::*;

pub mod constants;

mod error;
pub use error::ModelError;
