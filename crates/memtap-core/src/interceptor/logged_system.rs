//! Substitute memory system handed out by [`FileLogger::wrap`].
//!
//! Every access is routed by the address window: hits go to the shared value
//! logger with the window-local address, misses reach the wrapped system with
//! their original arguments and return its status untouched.
//!
//! Data reads are never intercepted, even inside the window. Logged reads
//! return success without writing into the caller's buffer; some callers hand
//! in buffers that must not be touched.
//!
//! [`FileLogger::wrap`]: super::FileLogger

use std::{cell::RefCell, rc::Rc};

use crate::{
    cpu::Cpu,
    logger::{Access, ValueLogger},
    status::Status,
    system::MemorySystem,
    window::AccessWindow,
};

/// Destination of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Logger { local_addr: u64 },
    Original,
}

#[derive(Debug)]
pub struct LoggedSystem {
    window: AccessWindow,
    logger: Rc<RefCell<ValueLogger>>,
    orig: Box<dyn MemorySystem>,
}

impl LoggedSystem {
    pub(crate) fn new(
        window: AccessWindow,
        logger: Rc<RefCell<ValueLogger>>,
        orig: Box<dyn MemorySystem>,
    ) -> Self {
        Self {
            window,
            logger,
            orig,
        }
    }

    pub fn route(&self, addr: u64) -> Route {
        if self.window.contains(addr) {
            Route::Logger {
                local_addr: self.window.local_address(addr),
            }
        } else {
            Route::Original
        }
    }

    pub(crate) fn logger(&self) -> &Rc<RefCell<ValueLogger>> {
        &self.logger
    }

    pub(crate) fn into_original(self) -> Box<dyn MemorySystem> {
        self.orig
    }

    fn log(&self, access: Access, local_addr: u64, buf: Option<&[u8]>) -> Status {
        self.logger.borrow_mut().log(access, local_addr, buf)
    }
}

impl MemorySystem for LoggedSystem {
    fn instruction_read(&mut self, cpu: &mut Cpu, addr: u64, len: u32) -> Status {
        match self.route(addr) {
            Route::Logger { local_addr } => self.log(Access::Read, local_addr, None),
            Route::Original => self.orig.instruction_read(cpu, addr, len),
        }
    }

    fn instruction_write(&mut self, cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        match self.route(addr) {
            Route::Logger { local_addr } => self.log(Access::Write, local_addr, Some(buf)),
            Route::Original => self.orig.instruction_write(cpu, addr, buf),
        }
    }

    fn data_read(&mut self, cpu: &mut Cpu, addr: u64, buf: &mut [u8]) -> Status {
        self.orig.data_read(cpu, addr, buf)
    }

    fn data_write(&mut self, cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        match self.route(addr) {
            Route::Logger { local_addr } => self.log(Access::Write, local_addr, Some(buf)),
            Route::Original => self.orig.data_write(cpu, addr, buf),
        }
    }

    fn debug_read(&mut self, addr: u64, buf: &mut [u8]) -> Status {
        match self.route(addr) {
            Route::Logger { local_addr } => self.log(Access::Read, local_addr, Some(&*buf)),
            Route::Original => self.orig.debug_read(addr, buf),
        }
    }

    fn debug_write(&mut self, addr: u64, buf: &[u8]) -> Status {
        match self.route(addr) {
            Route::Logger { local_addr } => self.log(Access::Write, local_addr, Some(buf)),
            Route::Original => self.orig.debug_write(addr, buf),
        }
    }

    fn sync_time(&mut self, cpu: &mut Cpu) {
        self.orig.sync_time(cpu);
    }
}
