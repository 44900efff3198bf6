//! Engine backed by the core's shared library, loaded at runtime.

use crate::error::{TransportError, TransportResult};
use crate::handle::{Engine, RawHandle};
use std::ffi::{CStr, CString, c_char, c_void};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Entry point names the core exports by default.
pub const DEFAULT_INIT_SYMBOL: &str = "init";
pub const DEFAULT_RUN_COMMAND_SYMBOL: &str = "run_command";
pub const DEFAULT_FREE_SYMBOL: &str = "free_mem";

type InitFn = unsafe extern "C" fn(*const c_char) -> *mut c_void;
type RunCommandFn = unsafe extern "C" fn(*const c_char, *mut c_void) -> *mut c_char;
type FreeMemFn = unsafe extern "C" fn(*mut c_void);
type FreeStringFn = unsafe extern "C" fn(*mut c_char);

/// Where to find the core and what its entry points are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeLibrary {
    pub path: PathBuf,
    pub init_symbol: String,
    pub run_command_symbol: String,
    pub free_symbol: String,
    /// Releases strings returned by `run_command`. Without it the response
    /// buffers are left to the core.
    pub free_string_symbol: Option<String>,
}

impl NativeLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            init_symbol: DEFAULT_INIT_SYMBOL.to_string(),
            run_command_symbol: DEFAULT_RUN_COMMAND_SYMBOL.to_string(),
            free_symbol: DEFAULT_FREE_SYMBOL.to_string(),
            free_string_symbol: None,
        }
    }

    pub fn with_free_string_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.free_string_symbol = Some(symbol.into());
        self
    }
}

/// A loaded core library. Closed when the last reference is dropped, so any
/// open [`EngineHandle`](crate::EngineHandle) keeps it mapped.
pub struct NativeEngine {
    library: NativeLibrary,
    module: *mut c_void,
    init: InitFn,
    run_command: RunCommandFn,
    free_mem: FreeMemFn,
    free_string: Option<FreeStringFn>,
}

// The library handle and function pointers are immutable after load. Handle
// level exclusion is the caller's job.
unsafe impl Send for NativeEngine {}
unsafe impl Sync for NativeEngine {}

impl NativeEngine {
    /// Opens the library and resolves every entry point.
    pub fn load(library: NativeLibrary) -> TransportResult<Self> {
        let module = dl::open(&library.path)?;

        let resolved = (|| -> TransportResult<_> {
            let init = dl::symbol(module, &library.init_symbol)?;
            let run_command = dl::symbol(module, &library.run_command_symbol)?;
            let free_mem = dl::symbol(module, &library.free_symbol)?;
            let free_string = match &library.free_string_symbol {
                Some(name) => Some(dl::symbol(module, name)?),
                None => None,
            };
            Ok((init, run_command, free_mem, free_string))
        })();

        let (init, run_command, free_mem, free_string) = match resolved {
            Ok(symbols) => symbols,
            Err(e) => {
                dl::close(module);
                return Err(e);
            }
        };

        info!(path = %library.path.display(), "native core loaded");

        // SAFETY: the symbols were resolved from the core and have the
        // documented C signatures.
        let free_string =
            free_string.map(|f| unsafe { std::mem::transmute::<*mut c_void, FreeStringFn>(f) });
        unsafe {
            Ok(Self {
                library,
                module,
                init: std::mem::transmute::<*mut c_void, InitFn>(init),
                run_command: std::mem::transmute::<*mut c_void, RunCommandFn>(run_command),
                free_mem: std::mem::transmute::<*mut c_void, FreeMemFn>(free_mem),
                free_string,
            })
        }
    }

    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }
}

fn to_c_string(text: &str) -> TransportResult<CString> {
    CString::new(text).map_err(|e| TransportError::InvalidCommand(e.to_string()))
}

impl Engine for NativeEngine {
    fn init(&self, settings: &str) -> TransportResult<RawHandle> {
        let settings = to_c_string(settings)?;
        let ptr = unsafe { (self.init)(settings.as_ptr()) };
        RawHandle::new(ptr as usize)
    }

    fn run_command(&self, handle: RawHandle, command: &str) -> TransportResult<String> {
        let command = to_c_string(command)?;
        let ptr = unsafe { (self.run_command)(command.as_ptr(), handle.get() as *mut c_void) };
        if ptr.is_null() {
            return Err(TransportError::NullResponse);
        }

        let response = unsafe { CStr::from_ptr(ptr) }
            .to_str()
            .map(str::to_owned)
            .map_err(|_| TransportError::InvalidUtf8);

        if let Some(free_string) = self.free_string {
            unsafe { free_string(ptr) };
        }
        response
    }

    fn free(&self, handle: RawHandle) {
        unsafe { (self.free_mem)(handle.get() as *mut c_void) };
    }
}

impl fmt::Debug for NativeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeEngine")
            .field("library", &self.library)
            .finish_non_exhaustive()
    }
}

impl Drop for NativeEngine {
    fn drop(&mut self) {
        dl::close(self.module);
        debug!(path = %self.library.path.display(), "native core unloaded");
    }
}

#[cfg(unix)]
mod dl {
    use crate::error::{TransportError, TransportResult};
    use std::ffi::{CStr, CString, c_void};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    fn last_error() -> String {
        let err = unsafe { libc::dlerror() };
        if err.is_null() {
            "unknown dynamic loader error".to_string()
        } else {
            unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
        }
    }

    pub(super) fn open(path: &Path) -> TransportResult<*mut c_void> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| TransportError::LibraryLoad(e.to_string()))?;
        let module = unsafe { libc::dlopen(c_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if module.is_null() {
            return Err(TransportError::LibraryLoad(last_error()));
        }
        Ok(module)
    }

    pub(super) fn symbol(module: *mut c_void, name: &str) -> TransportResult<*mut c_void> {
        let c_name =
            CString::new(name).map_err(|_| TransportError::MissingSymbol(name.to_string()))?;
        let sym = unsafe { libc::dlsym(module, c_name.as_ptr()) };
        if sym.is_null() {
            return Err(TransportError::MissingSymbol(name.to_string()));
        }
        Ok(sym)
    }

    pub(super) fn close(module: *mut c_void) {
        unsafe { libc::dlclose(module) };
    }
}

#[cfg(not(unix))]
mod dl {
    use crate::error::{TransportError, TransportResult};
    use std::ffi::c_void;
    use std::path::Path;

    pub(super) fn open(path: &Path) -> TransportResult<*mut c_void> {
        Err(TransportError::LibraryLoad(format!(
            "runtime loading is not supported on this platform: {}",
            path.display()
        )))
    }

    pub(super) fn symbol(_module: *mut c_void, name: &str) -> TransportResult<*mut c_void> {
        Err(TransportError::MissingSymbol(name.to_string()))
    }

    pub(super) fn close(_module: *mut c_void) {}
}
