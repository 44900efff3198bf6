//! The engine trait and the owned handle wrapper.

use crate::error::{TransportError, TransportResult};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

/// Opaque handle value issued by the core. Never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(NonZeroUsize);

impl RawHandle {
    /// Wraps a raw handle value, rejecting zero.
    pub fn new(value: usize) -> TransportResult<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(TransportError::NullHandle)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// The three entry points exported by the native core.
///
/// `run_command` is a single blocking call with no cancellation. The core does
/// not promise thread safety for a handle, so callers must not dispatch on the
/// same handle from two threads at once.
pub trait Engine: Send + Sync {
    /// Creates core-side state from a JSON settings document.
    fn init(&self, settings: &str) -> TransportResult<RawHandle>;

    /// Runs one JSON command and returns the raw JSON response.
    fn run_command(&self, handle: RawHandle, command: &str) -> TransportResult<String>;

    /// Releases core-side state. The handle is invalid afterwards.
    fn free(&self, handle: RawHandle);
}

/// An owned, live handle. Released exactly once, on [`close`](Self::close) or drop.
pub struct EngineHandle {
    engine: Arc<dyn Engine>,
    raw: Option<RawHandle>,
}

impl EngineHandle {
    /// Calls the core's init entry point.
    pub fn open(engine: Arc<dyn Engine>, settings: &str) -> TransportResult<Self> {
        let raw = engine.init(settings)?;
        debug!(handle = %raw, "engine handle opened");
        Ok(Self {
            engine,
            raw: Some(raw),
        })
    }

    /// Sends one command across the boundary. Never retried: a retried create
    /// would duplicate the resource.
    pub fn run_command(&self, command: &str) -> TransportResult<String> {
        let raw = self.raw.ok_or(TransportError::NullHandle)?;
        self.engine.run_command(raw, command)
    }

    /// The underlying handle value, for logging.
    pub fn raw(&self) -> Option<RawHandle> {
        self.raw
    }

    /// Releases the handle now.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(raw) = self.raw.take() {
            self.engine.free(raw);
            debug!(handle = %raw, "engine handle released");
        }
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle").field("raw", &self.raw).finish()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        if self.raw.is_some() {
            debug!("engine handle dropped while open");
            self.release();
        }
    }
}
