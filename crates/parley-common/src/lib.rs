pub mod errors;

pub use errors::{ConfigError, ParleyError};
