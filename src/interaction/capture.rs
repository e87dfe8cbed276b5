use std::fmt;

use tracing::trace;

/// Host hook that installs and removes the global pointer move/up listeners.
///
/// The editor only calls `attach` when an interaction starts and guarantees a
/// matching `detach` on every exit path.
pub trait PointerCaptureHost {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Capture host for headless use: nothing to attach.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCaptureHost;

impl PointerCaptureHost for NoopCaptureHost {
    fn attach(&mut self) {}

    fn detach(&mut self) {}
}

/// Scoped ownership of the pointer listeners.
///
/// Dropping the capture while attached detaches the listeners.
pub struct PointerCapture {
    host: Box<dyn PointerCaptureHost>,
    attached: bool,
}

impl PointerCapture {
    #[must_use]
    pub fn new(host: Box<dyn PointerCaptureHost>) -> Self {
        Self {
            host,
            attached: false,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn acquire(&mut self) {
        if self.attached {
            return;
        }
        self.host.attach();
        self.attached = true;
        trace!("pointer listeners attached");
    }

    pub fn release(&mut self) {
        if !self.attached {
            return;
        }
        self.host.detach();
        self.attached = false;
        trace!("pointer listeners detached");
    }

    /// Swaps the host, detaching listeners from the previous one first.
    pub fn replace_host(&mut self, host: Box<dyn PointerCaptureHost>) {
        self.release();
        self.host = host;
    }
}

impl Default for PointerCapture {
    fn default() -> Self {
        Self::new(Box::new(NoopCaptureHost))
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}
