/// Execution context handed to every memory system call.
///
/// Interceptors treat it as opaque and hand it to the wrapped system as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cpu {
    pub instruction_pointer: u64,
    /// Simulated time in picoseconds.
    pub cpu_time_ps: u64,
    /// Length of one CPU cycle in picoseconds.
    pub cpu_cycle_time_ps: u64,
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances simulated time by `cycles` CPU cycles.
    pub fn advance(&mut self, cycles: u64) {
        self.cpu_time_ps = self
            .cpu_time_ps
            .wrapping_add(cycles.wrapping_mul(self.cpu_cycle_time_ps));
    }
}
