//! Host-facing surface of memtap: option bag, logger configuration and the
//! plugin library table.

pub mod config;
pub mod error;
pub mod library;
pub mod options;

pub use config::file_logger_config;
pub use error::PluginError;
pub use library::PluginLibrary;
pub use options::Options;
