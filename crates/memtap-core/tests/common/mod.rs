#![allow(dead_code)]

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use memtap_core::{AccessWindow, CollectedWarnings, FileLogger, Sink};

pub const TOHOST: AccessWindow = AccessWindow::new(0x8000_0000, 0xF000_0000);

/// Writer whose contents stay readable after it is moved into a sink.
#[derive(Debug, Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture_logger(
    window: AccessWindow,
    terminate_on_write: bool,
) -> (FileLogger, SharedOutput, CollectedWarnings) {
    let out = SharedOutput::default();
    let warnings = CollectedWarnings::new();
    let logger = FileLogger::from_parts(
        window,
        Sink::writer(out.clone()),
        terminate_on_write,
        Rc::new(warnings.clone()),
    );
    (logger, out, warnings)
}
