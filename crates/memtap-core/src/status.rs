use std::fmt;

/// Return code of a memory system call.
///
/// `0` means "success, continue". [`Status::CPU_FINISHED`] asks the simulation
/// core to stop. Every other value is owned by the memory system that produced
/// it and is passed through untouched by interceptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status(pub i32);

impl Status {
    pub const OK: Self = Self(0);
    pub const DBUS_READ_ERROR: Self = Self(-5);
    pub const DBUS_WRITE_ERROR: Self = Self(-6);
    pub const IBUS_READ_ERROR: Self = Self(-7);
    pub const IBUS_WRITE_ERROR: Self = Self(-8);
    /// Halt request: the simulated program is done.
    pub const CPU_FINISHED: Self = Self(i32::MIN);

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when the simulation core must stop after this call.
    pub const fn is_halt(self) -> bool {
        self.0 == Self::CPU_FINISHED.0
    }
}

impl From<i32> for Status {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Status> for i32 {
    fn from(value: Status) -> Self {
        value.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OK => write!(f, "ok"),
            Self::DBUS_READ_ERROR => write!(f, "data bus read error"),
            Self::DBUS_WRITE_ERROR => write!(f, "data bus write error"),
            Self::IBUS_READ_ERROR => write!(f, "instruction bus read error"),
            Self::IBUS_WRITE_ERROR => write!(f, "instruction bus write error"),
            Self::CPU_FINISHED => write!(f, "cpu finished"),
            Self(code) => write!(f, "status {code}"),
        }
    }
}
