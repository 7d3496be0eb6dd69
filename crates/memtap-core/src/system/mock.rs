use std::{cell::RefCell, rc::Rc};

use crate::{cpu::Cpu, status::Status, system::MemorySystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    InstructionRead { addr: u64, len: u32 },
    InstructionWrite { addr: u64, data: Vec<u8> },
    DataRead { addr: u64, len: usize },
    DataWrite { addr: u64, data: Vec<u8> },
    DebugRead { addr: u64, len: usize },
    DebugWrite { addr: u64, data: Vec<u8> },
    SyncTime,
}

/// Records every call and answers with a fixed status. Reads fill the buffer
/// with [`RecordingSystem::FILL`].
#[derive(Debug)]
pub(crate) struct RecordingSystem {
    calls: Rc<RefCell<Vec<Call>>>,
    status: Status,
}

impl RecordingSystem {
    pub(crate) const FILL: u8 = 0xA5;

    pub(crate) fn new(status: Status) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: Rc::clone(&calls),
                status,
            },
            calls,
        )
    }

    fn record(&self, call: Call) -> Status {
        self.calls.borrow_mut().push(call);
        self.status
    }
}

impl MemorySystem for RecordingSystem {
    fn instruction_read(&mut self, _cpu: &mut Cpu, addr: u64, len: u32) -> Status {
        self.record(Call::InstructionRead { addr, len })
    }

    fn instruction_write(&mut self, _cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        self.record(Call::InstructionWrite {
            addr,
            data: buf.to_vec(),
        })
    }

    fn data_read(&mut self, _cpu: &mut Cpu, addr: u64, buf: &mut [u8]) -> Status {
        buf.fill(Self::FILL);
        self.record(Call::DataRead {
            addr,
            len: buf.len(),
        })
    }

    fn data_write(&mut self, _cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        self.record(Call::DataWrite {
            addr,
            data: buf.to_vec(),
        })
    }

    fn debug_read(&mut self, addr: u64, buf: &mut [u8]) -> Status {
        buf.fill(Self::FILL);
        self.record(Call::DebugRead {
            addr,
            len: buf.len(),
        })
    }

    fn debug_write(&mut self, addr: u64, buf: &[u8]) -> Status {
        self.record(Call::DebugWrite {
            addr,
            data: buf.to_vec(),
        })
    }

    fn sync_time(&mut self, _cpu: &mut Cpu) {
        self.record(Call::SyncTime);
    }
}
