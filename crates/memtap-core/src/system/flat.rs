//! Single-segment RAM memory system.

use std::ops::Range;

use crate::{cpu::Cpu, status::Status, system::MemorySystem};

pub const DEFAULT_ORIGIN: u64 = 0x8000_0000;
pub const DEFAULT_LENGTH: usize = 0x0010_0000;

/// One contiguous RAM segment starting at `origin`.
///
/// Accesses that do not fit entirely inside the segment fail with the bus
/// error matching the access kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMemory {
    origin: u64,
    mem: Vec<u8>,
    syncs: u64,
}

impl FlatMemory {
    pub fn new(origin: u64, len: usize) -> Self {
        Self {
            origin,
            mem: vec![0; len],
            syncs: 0,
        }
    }

    pub fn origin(&self) -> u64 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Number of `sync_time` calls seen so far.
    pub fn syncs(&self) -> u64 {
        self.syncs
    }

    /// Segment contents at `addr..addr + len`, when mapped.
    pub fn bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let range = self.range(addr, len)?;
        Some(&self.mem[range])
    }

    /// Copies `data` into the segment without going through the bus.
    pub fn load(&mut self, addr: u64, data: &[u8]) -> bool {
        match self.range(addr, data.len()) {
            Some(range) => {
                self.mem[range].copy_from_slice(data);
                true
            }
            None => false,
        }
    }

    fn range(&self, addr: u64, len: usize) -> Option<Range<usize>> {
        let offset = usize::try_from(addr.checked_sub(self.origin)?).ok()?;
        let end = offset.checked_add(len)?;
        (end <= self.mem.len()).then_some(offset..end)
    }

    fn read_into(&self, addr: u64, buf: &mut [u8], error: Status) -> Status {
        match self.range(addr, buf.len()) {
            Some(range) => {
                buf.copy_from_slice(&self.mem[range]);
                Status::OK
            }
            None => error,
        }
    }

    fn write_from(&mut self, addr: u64, buf: &[u8], error: Status) -> Status {
        if self.load(addr, buf) { Status::OK } else { error }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_LENGTH)
    }
}

impl MemorySystem for FlatMemory {
    fn instruction_read(&mut self, _cpu: &mut Cpu, addr: u64, len: u32) -> Status {
        match usize::try_from(len).ok().and_then(|len| self.range(addr, len)) {
            Some(_) => Status::OK,
            None => Status::IBUS_READ_ERROR,
        }
    }

    fn instruction_write(&mut self, _cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        self.write_from(addr, buf, Status::IBUS_WRITE_ERROR)
    }

    fn data_read(&mut self, _cpu: &mut Cpu, addr: u64, buf: &mut [u8]) -> Status {
        self.read_into(addr, buf, Status::DBUS_READ_ERROR)
    }

    fn data_write(&mut self, _cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status {
        self.write_from(addr, buf, Status::DBUS_WRITE_ERROR)
    }

    fn debug_read(&mut self, addr: u64, buf: &mut [u8]) -> Status {
        self.read_into(addr, buf, Status::DBUS_READ_ERROR)
    }

    fn debug_write(&mut self, addr: u64, buf: &[u8]) -> Status {
        self.write_from(addr, buf, Status::DBUS_WRITE_ERROR)
    }

    fn sync_time(&mut self, _cpu: &mut Cpu) {
        self.syncs = self.syncs.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_round_trips_inside_segment() {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new(0x1000, 0x100);
        assert_eq!(mem.data_write(&mut cpu, 0x1010, &[1, 2, 3, 4]), Status::OK);
        let mut buf = [0u8; 4];
        assert_eq!(mem.data_read(&mut cpu, 0x1010, &mut buf), Status::OK);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(mem.bytes(0x1010, 4), Some(&[1u8, 2, 3, 4][..]));
    }

    #[test]
    fn out_of_range_reports_bus_errors() {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::new(0x1000, 0x100);
        let mut buf = [0xEEu8; 4];
        assert_eq!(mem.data_read(&mut cpu, 0x0FFF, &mut buf), Status::DBUS_READ_ERROR);
        assert_eq!(buf, [0xEE; 4]);
        assert_eq!(mem.data_write(&mut cpu, 0x10FE, &[0; 4]), Status::DBUS_WRITE_ERROR);
        assert_eq!(mem.instruction_read(&mut cpu, 0x2000, 4), Status::IBUS_READ_ERROR);
        assert_eq!(mem.instruction_write(&mut cpu, u64::MAX, &[0]), Status::IBUS_WRITE_ERROR);
        assert_eq!(mem.instruction_read(&mut cpu, 0x10FC, 4), Status::OK);
    }

    #[test]
    fn counts_time_syncs() {
        let mut cpu = Cpu::new();
        let mut mem = FlatMemory::default();
        mem.sync_time(&mut cpu);
        mem.sync_time(&mut cpu);
        assert_eq!(mem.syncs(), 2);
        assert_eq!(mem.origin(), DEFAULT_ORIGIN);
        assert_eq!(mem.len(), DEFAULT_LENGTH);
    }
}
