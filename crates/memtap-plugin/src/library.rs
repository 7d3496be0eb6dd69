//! Plugin library table: lists the plugins this crate provides and builds
//! them from an option bag.

use memtap_core::{FileLogger, SystemWrapper};

use crate::{config::file_logger_config, error::PluginError, options::Options};

#[derive(Debug, Clone, Copy, Default)]
pub struct PluginLibrary;

impl PluginLibrary {
    pub const NAME: &'static str = "memtap";

    const PLUGINS: &'static [&'static str] = &[FileLogger::NAME];

    pub fn plugin_count(&self) -> usize {
        Self::PLUGINS.len()
    }

    pub fn plugin_name(&self, index: usize) -> Option<&'static str> {
        Self::PLUGINS.get(index).copied()
    }

    pub fn plugin_names(&self) -> impl Iterator<Item = &'static str> {
        Self::PLUGINS.iter().copied()
    }

    pub fn create_plugin(
        &self,
        index: usize,
        options: &Options,
    ) -> Result<Box<dyn SystemWrapper>, PluginError> {
        match index {
            0 => {
                let config = file_logger_config(options)?;
                tracing::info!(
                    "creating {} (window {:#x}/{:#x}, output {:?}, terminate_on_write {})",
                    FileLogger::NAME,
                    config.log_addr & config.log_mask,
                    config.log_mask,
                    config.output,
                    config.terminate_on_write
                );
                Ok(Box::new(FileLogger::new(&config)?))
            }
            _ => Err(PluginError::UnknownPlugin(format!("#{index}"))),
        }
    }

    pub fn create_plugin_by_name(
        &self,
        name: &str,
        options: &Options,
    ) -> Result<Box<dyn SystemWrapper>, PluginError> {
        let index = Self::PLUGINS
            .iter()
            .position(|plugin| *plugin == name)
            .ok_or_else(|| PluginError::UnknownPlugin(name.to_owned()))?;
        self.create_plugin(index, options)
    }
}
