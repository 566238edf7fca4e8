//! sevlog - minimal severity-leveled file logger
//!
//! ```no_run
//! use sevlog::{Logger, Severity};
//!
//! # fn main() -> sevlog::Result<()> {
//! let mut logger = Logger::new("etc/log.txt", Severity::Info)?;
//! logger.log_crit("Diskspace under 2MB.", "Drive")?;
//! logger.log_debug("User-Hash: 838hshf82bd01()", "Usermodule")?; // below threshold
//! logger.close()
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{Logger, Severity};
