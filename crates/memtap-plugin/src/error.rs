use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("invalid value {value:?} for option {key} (expected {expected})")]
    InvalidOption {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Core(#[from] memtap_core::Error),
}
