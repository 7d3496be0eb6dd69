use memtap_core::{
    LoggerConfig, Output,
    logger::{DEFAULT_LOG_ADDR, DEFAULT_LOG_MASK},
};

use crate::{error::PluginError, options::Options};

pub const LOG_ADDR_KEY: &str = "plugin.filelogger.logaddr";
pub const LOG_MASK_KEY: &str = "plugin.filelogger.logmask";
pub const OUTPUT_PATH_KEY: &str = "plugin.filelogger.output_path";
pub const TERMINATE_ON_WRITE_KEY: &str = "plugin.filelogger.terminate_on_write";

/// Reads the file logger options, falling back to the defaults for missing keys.
pub fn file_logger_config(options: &Options) -> Result<LoggerConfig, PluginError> {
    Ok(LoggerConfig {
        log_addr: options.get_u64(LOG_ADDR_KEY, DEFAULT_LOG_ADDR)?,
        log_mask: options.get_u64(LOG_MASK_KEY, DEFAULT_LOG_MASK)?,
        output: Output::from_path(options.get_string(OUTPUT_PATH_KEY, "")),
        terminate_on_write: options.get_bool(TERMINATE_ON_WRITE_KEY, false)?,
    })
}

/// Inverse of [`file_logger_config`], used by front ends that build the bag themselves.
pub fn file_logger_options(config: &LoggerConfig) -> Options {
    let output = match &config.output {
        Output::Stdout => String::new(),
        Output::File(path) => path.display().to_string(),
    };
    [
        (LOG_ADDR_KEY, format!("{:#x}", config.log_addr)),
        (LOG_MASK_KEY, format!("{:#x}", config.log_mask)),
        (OUTPUT_PATH_KEY, output),
        (TERMINATE_ON_WRITE_KEY, config.terminate_on_write.to_string()),
    ]
    .into_iter()
    .collect()
}
