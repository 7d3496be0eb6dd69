//! Address-window memory interceptor.
//!
//! [`FileLogger`] wraps a [`MemorySystem`] so that writes hitting a configured
//! address window are decoded and appended to a sink as decimal values, while
//! every other access reaches the wrapped system untouched.

pub mod cpu;
pub mod decode;
pub mod diagnostics;
pub mod error;
pub mod interceptor;
pub mod logger;
pub mod sink;
pub mod status;
pub mod system;
pub mod window;

pub use cpu::Cpu;
pub use decode::{UnsupportedWidth, decode_unsigned};
pub use diagnostics::{CollectedWarnings, Diagnostics, TracingDiagnostics};
pub use error::{Error, UnwrapError, UnwrapFailure};
pub use interceptor::{FileLogger, LoggedSystem, SystemWrapper};
pub use logger::LoggerConfig;
pub use sink::{Output, Sink};
pub use status::Status;
pub use system::{FlatMemory, MemorySystem};
pub use window::AccessWindow;
