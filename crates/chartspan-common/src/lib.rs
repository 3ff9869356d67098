//! Common utilities and types for the chartspan time-axis library

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{ChartSpanError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use types::*;
