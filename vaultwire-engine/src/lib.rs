//! Boundary to the native vaultwire secrets core.
//!
//! The core is reached through three entry points: `init` turns a settings
//! document into an opaque handle, `run_command` executes one JSON command
//! against a handle and returns a JSON response, and `free_mem` releases the
//! handle. [`Engine`] models that boundary so the SDK can be driven by the
//! real shared library ([`NativeEngine`]) or by an in-process fake.

pub mod error;
pub mod handle;
pub mod native;

pub use error::{TransportError, TransportResult};
pub use handle::{Engine, EngineHandle, RawHandle};
pub use native::{NativeEngine, NativeLibrary};
