use std::{any::Any, fmt::Debug};

use crate::{cpu::Cpu, status::Status};

pub mod flat;
#[cfg(test)]
pub(crate) mod mock;

pub use flat::FlatMemory;

/// Memory subsystem addressed by a simulation core.
///
/// Buffer lengths are the access lengths. Instruction reads carry only a
/// length; the fetched bytes stay inside the memory system. Every call returns
/// a [`Status`]; implementations report their own failures through it and
/// never panic on out-of-range accesses.
pub trait MemorySystem: Any + Debug {
    fn instruction_read(&mut self, cpu: &mut Cpu, addr: u64, len: u32) -> Status;

    fn instruction_write(&mut self, cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status;

    fn data_read(&mut self, cpu: &mut Cpu, addr: u64, buf: &mut [u8]) -> Status;

    fn data_write(&mut self, cpu: &mut Cpu, addr: u64, buf: &[u8]) -> Status;

    /// Side-effect-free read used by debuggers.
    fn debug_read(&mut self, addr: u64, buf: &mut [u8]) -> Status;

    fn debug_write(&mut self, addr: u64, buf: &[u8]) -> Status;

    /// Lets the memory system catch up with the CPU's simulated time.
    fn sync_time(&mut self, cpu: &mut Cpu);
}
