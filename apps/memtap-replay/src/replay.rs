use anyhow::{Result, anyhow};
use memtap_core::{Cpu, MemorySystem, Status, SystemWrapper};

use crate::trace::{Access, Op};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Accesses issued, including the one that halted the replay.
    pub accesses: usize,
    /// Trace line whose access returned the halt status.
    pub halted_at: Option<usize>,
    /// Accesses that returned a status other than ok or halt.
    pub failures: usize,
}

/// Wraps `memory` with `plugin`, runs `trace` through the substitute and
/// unwraps again. Returns the original memory system alongside the summary.
pub fn replay(
    plugin: &mut dyn SystemWrapper,
    memory: Box<dyn MemorySystem>,
    trace: &[Access],
) -> Result<(Summary, Box<dyn MemorySystem>)> {
    let mut cpu = Cpu {
        cpu_cycle_time_ps: 1_000,
        ..Cpu::default()
    };
    let mut system = plugin.wrap(&mut cpu, memory);
    let mut summary = Summary::default();

    for access in trace {
        let status = issue(system.as_mut(), &mut cpu, &access.op);
        summary.accesses += 1;
        cpu.advance(1);

        if status.is_halt() {
            tracing::info!("line {}: {:?} requested halt", access.line, access.op);
            summary.halted_at = Some(access.line);
            break;
        }
        if !status.is_ok() {
            tracing::warn!("line {}: {:?} returned {}", access.line, access.op, status);
            summary.failures += 1;
        }
    }

    let memory = plugin
        .unwrap(&mut cpu, system)
        .map_err(|err| anyhow!("{err}"))?;
    Ok((summary, memory))
}

fn issue(system: &mut dyn MemorySystem, cpu: &mut Cpu, op: &Op) -> Status {
    match op {
        Op::InstructionRead { addr, len } => {
            cpu.instruction_pointer = *addr;
            system.instruction_read(cpu, *addr, *len)
        }
        Op::InstructionWrite { addr, data } => system.instruction_write(cpu, *addr, data),
        Op::DataRead { addr, len } => {
            let mut buf = vec![0; *len];
            let status = system.data_read(cpu, *addr, &mut buf);
            tracing::debug!("dread {:#x} -> {}", addr, hex::encode(&buf));
            status
        }
        Op::DataWrite { addr, data } => system.data_write(cpu, *addr, data),
        Op::DebugRead { addr, len } => {
            let mut buf = vec![0; *len];
            let status = system.debug_read(*addr, &mut buf);
            tracing::debug!("dbg_read {:#x} -> {}", addr, hex::encode(&buf));
            status
        }
        Op::DebugWrite { addr, data } => system.debug_write(*addr, data),
        Op::SyncTime => {
            system.sync_time(cpu);
            Status::OK
        }
    }
}
