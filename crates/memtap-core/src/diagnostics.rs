use std::{cell::RefCell, fmt::Debug, rc::Rc};

/// Sink for non-fatal conditions raised by the logger and interceptor.
pub trait Diagnostics: Debug {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Keeps every warning in memory so a host can show them later.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectedWarnings {
    messages: Rc<RefCell<Vec<String>>>,
}

impl CollectedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Diagnostics for CollectedWarnings {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
        self.messages.borrow_mut().push(message.to_owned());
    }
}
