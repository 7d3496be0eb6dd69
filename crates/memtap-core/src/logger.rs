//! Value logger: turns intercepted writes into decimal lines on a sink.

use std::{io::Write, rc::Rc};

use crate::{
    decode::decode_unsigned,
    diagnostics::Diagnostics,
    sink::{Output, Sink},
    status::Status,
    window::AccessWindow,
};

pub const DEFAULT_LOG_ADDR: u64 = 0x8000_0000;
pub const DEFAULT_LOG_MASK: u64 = 0xF000_0000;

/// Construction parameters of a file logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_addr: u64,
    pub log_mask: u64,
    pub output: Output,
    /// Ask the simulation core to stop after the first logged write.
    pub terminate_on_write: bool,
}

impl LoggerConfig {
    pub fn window(&self) -> AccessWindow {
        AccessWindow::new(self.log_addr, self.log_mask)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_addr: DEFAULT_LOG_ADDR,
            log_mask: DEFAULT_LOG_MASK,
            output: Output::Stdout,
            terminate_on_write: false,
        }
    }
}

/// Direction of an access handed to the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

#[derive(Debug)]
pub struct ValueLogger {
    sink: Sink,
    terminate_on_write: bool,
    diagnostics: Rc<dyn Diagnostics>,
}

impl ValueLogger {
    pub(crate) fn new(
        sink: Sink,
        terminate_on_write: bool,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        Self {
            sink,
            terminate_on_write,
            diagnostics,
        }
    }

    pub(crate) fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }

    /// Logs one intercepted access.
    ///
    /// Reads are never logged and never touch a buffer; the caller's read
    /// buffer must stay exactly as supplied. `local_addr` does not appear in
    /// the output, which is value-only.
    pub(crate) fn log(&mut self, access: Access, local_addr: u64, buf: Option<&[u8]>) -> Status {
        if access == Access::Read {
            return Status::OK;
        }
        let Some(buf) = buf.filter(|buf| !buf.is_empty()) else {
            return Status::OK;
        };

        let value = match decode_unsigned(buf) {
            Ok(value) => value,
            Err(err) => {
                self.diagnostics.warn(&err.to_string());
                return Status::OK;
            }
        };
        tracing::trace!(local_addr, value, "logged write");

        // Flush per value so the log survives a crash of the simulated program.
        if let Err(err) = writeln!(self.sink, "{value}").and_then(|()| self.sink.flush()) {
            self.diagnostics
                .warn(&format!("FileLogger failed to write value {value}: {err}"));
        }

        if self.terminate_on_write {
            self.diagnostics.warn("FileLogger terminating");
            return Status::CPU_FINISHED;
        }
        Status::OK
    }
}
