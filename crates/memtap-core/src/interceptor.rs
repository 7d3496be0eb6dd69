use std::{any::Any, borrow::Cow, cell::RefCell, fmt::Debug, rc::Rc};

use crate::{
    cpu::Cpu,
    diagnostics::{Diagnostics, TracingDiagnostics},
    error::{Error, UnwrapError, UnwrapFailure},
    logger::{LoggerConfig, ValueLogger},
    sink::Sink,
    system::MemorySystem,
    window::AccessWindow,
};

pub mod logged_system;

pub use logged_system::{LoggedSystem, Route};

/// Plugin that substitutes a memory system with a wrapper around it.
///
/// Each `wrap` must be matched by exactly one `unwrap`, which hands the
/// original system back.
pub trait SystemWrapper: Debug {
    fn name(&self) -> Cow<'static, str>;

    fn wrap(&mut self, cpu: &mut Cpu, system: Box<dyn MemorySystem>) -> Box<dyn MemorySystem>;

    fn unwrap(
        &mut self,
        cpu: &mut Cpu,
        system: Box<dyn MemorySystem>,
    ) -> Result<Box<dyn MemorySystem>, UnwrapError>;
}

/// Logs writes that hit an address window and forwards everything else.
#[derive(Debug)]
pub struct FileLogger {
    window: AccessWindow,
    logger: Rc<RefCell<ValueLogger>>,
    active_wraps: usize,
}

impl FileLogger {
    pub const NAME: &'static str = "FileLogger";

    /// Opens the configured output and reports warnings through `tracing`.
    pub fn new(config: &LoggerConfig) -> Result<Self, Error> {
        Self::with_diagnostics(config, Rc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(
        config: &LoggerConfig,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Result<Self, Error> {
        let sink = config.output.open()?;
        Ok(Self::from_parts(
            config.window(),
            sink,
            config.terminate_on_write,
            diagnostics,
        ))
    }

    /// Builds a logger around an already opened sink.
    pub fn from_parts(
        window: AccessWindow,
        sink: Sink,
        terminate_on_write: bool,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        if window.matches_everything() {
            diagnostics.warn(
                "FileLogger instantiated with mask and address set to 0. this will redirect all \
                 read/writes exclusively to this logger instance.",
            );
        }
        Self {
            window,
            logger: Rc::new(RefCell::new(ValueLogger::new(
                sink,
                terminate_on_write,
                diagnostics,
            ))),
            active_wraps: 0,
        }
    }

    pub fn window(&self) -> AccessWindow {
        self.window
    }

    /// Number of substitutes handed out and not yet unwrapped.
    pub fn active_wraps(&self) -> usize {
        self.active_wraps
    }

    fn owns(&self, system: &LoggedSystem) -> bool {
        Rc::ptr_eq(&self.logger, system.logger())
    }
}

impl SystemWrapper for FileLogger {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::NAME)
    }

    fn wrap(&mut self, _cpu: &mut Cpu, system: Box<dyn MemorySystem>) -> Box<dyn MemorySystem> {
        self.active_wraps += 1;
        tracing::debug!(
            "wrapping memory system (window {:#x}/{:#x}, active {})",
            self.window.base(),
            self.window.mask(),
            self.active_wraps
        );
        Box::new(LoggedSystem::new(self.window, Rc::clone(&self.logger), system))
    }

    fn unwrap(
        &mut self,
        _cpu: &mut Cpu,
        system: Box<dyn MemorySystem>,
    ) -> Result<Box<dyn MemorySystem>, UnwrapError> {
        let failure = match (system.as_ref() as &dyn Any).downcast_ref::<LoggedSystem>() {
            Some(logged) if self.owns(logged) => None,
            Some(_) => Some(UnwrapFailure::ForeignLogger),
            None => Some(UnwrapFailure::NotWrapped),
        };
        if let Some(reason) = failure {
            self.logger
                .borrow()
                .diagnostics()
                .warn(&format!("FileLogger refused to unwrap: {reason}"));
            return Err(UnwrapError::new(reason, system));
        }

        let system: Box<dyn Any> = system;
        let Ok(logged) = system.downcast::<LoggedSystem>() else {
            unreachable!("substitute type checked above");
        };
        self.active_wraps = self.active_wraps.saturating_sub(1);
        tracing::debug!(active = self.active_wraps, "unwrapping memory system");
        Ok(logged.into_original())
    }
}
