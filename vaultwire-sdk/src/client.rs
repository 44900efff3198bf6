//! Client lifecycle and the dispatch choke point.

use crate::auth::Auth;
use crate::error::{SdkError, SdkResult};
use crate::generators::Generators;
use crate::platform::Platform;
use crate::projects::Projects;
use crate::response::unwrap_response;
use crate::secrets::Secrets;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use tracing::{debug, info};
use vaultwire_engine::{Engine, EngineHandle, NativeEngine, NativeLibrary, TransportError};
use vaultwire_schema::wire::encode_command;
use vaultwire_schema::{ClientSettings, Command};

/// Where a client is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// A handle exists; no login has succeeded yet.
    Initialized,
    /// A login reported `authenticated`. Informational only, the core
    /// enforces authentication itself.
    Authenticated,
    /// The handle has been released.
    Closed,
}

struct Inner {
    handle: Option<EngineHandle>,
    state: ClientState,
}

/// A client owning exactly one core handle.
///
/// Commands on one client are serialized through an internal lock, so a
/// `Client` can be shared across threads by reference or `Arc`. Dropping the
/// client releases the handle if [`close`](Self::close) was not called.
pub struct Client {
    settings: ClientSettings,
    inner: Mutex<Inner>,
}

impl Client {
    /// Initializes core-side state for `settings` through `engine`.
    pub fn new(engine: Arc<dyn Engine>, settings: ClientSettings) -> SdkResult<Self> {
        let settings_json = serde_json::to_string(&settings)
            .map_err(|e| SdkError::Initialization(TransportError::InvalidCommand(e.to_string())))?;

        let handle = EngineHandle::open(engine, &settings_json).map_err(SdkError::Initialization)?;
        if let Some(raw) = handle.raw() {
            info!(handle = %raw, api_url = %settings.api_url, "client initialized");
        }

        Ok(Self {
            settings,
            inner: Mutex::new(Inner {
                handle: Some(handle),
                state: ClientState::Initialized,
            }),
        })
    }

    /// Loads the core from a shared library and initializes a client on it.
    pub fn from_library(library: NativeLibrary, settings: ClientSettings) -> SdkResult<Self> {
        let engine = NativeEngine::load(library).map_err(SdkError::Initialization)?;
        Self::new(Arc::new(engine), settings)
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn state(&self) -> ClientState {
        self.lock().state
    }

    pub fn is_closed(&self) -> bool {
        self.state() == ClientState::Closed
    }

    /// Releases the handle. Every later call fails with
    /// [`SdkError::UseAfterClose`], including a second `close`.
    pub fn close(&self) -> SdkResult<()> {
        let mut inner = self.lock();
        let handle = inner.handle.take().ok_or(SdkError::UseAfterClose)?;
        inner.state = ClientState::Closed;
        handle.close();
        info!("client closed");
        Ok(())
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    pub fn secrets(&self) -> Secrets<'_> {
        Secrets::new(self)
    }

    pub fn generators(&self) -> Generators<'_> {
        Generators::new(self)
    }

    pub fn platform(&self) -> Platform<'_> {
        Platform::new(self)
    }

    /// Sends a command and decodes its payload.
    pub(crate) fn run<T: DeserializeOwned>(&self, command: Command) -> SdkResult<T> {
        let raw = self.dispatch(&command)?;
        unwrap_response(&raw).inspect_err(|e| {
            debug!(command = command.name(), error = %e, "command failed");
        })
    }

    /// Sends a command and returns the raw response. The lock is held for the
    /// duration of the native call.
    pub(crate) fn dispatch(&self, command: &Command) -> SdkResult<String> {
        let inner = self.lock();
        let handle = inner.handle.as_ref().ok_or(SdkError::UseAfterClose)?;

        let bytes = encode_command(command)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| TransportError::InvalidCommand(e.to_string()))?;

        if let Some(raw) = handle.raw() {
            debug!(command = command.name(), handle = %raw, "dispatching command");
        }
        Ok(handle.run_command(&text)?)
    }

    pub(crate) fn mark_authenticated(&self) {
        let mut inner = self.lock();
        if inner.state == ClientState::Initialized {
            inner.state = ClientState::Authenticated;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("Client");
        out.field("settings", &self.settings);
        // Never wait on the lock: it is held for the length of a native call.
        match self.inner.try_lock() {
            Ok(inner) => out.field("state", &inner.state),
            Err(TryLockError::Poisoned(poisoned)) => {
                out.field("state", &poisoned.into_inner().state)
            }
            Err(TryLockError::WouldBlock) => out.field("state", &format_args!("<busy>")),
        };
        out.finish()
    }
}
