//! Typed client for the vaultwire secrets core.
//!
//! A [`Client`] owns one handle into the native core. Facades build a single
//! [`Command`], the client dispatches it and unwraps the
//! `{success, data, errorMessage}` envelope into a typed value or an
//! [`SdkError`].
//!
//! ```no_run
//! use vaultwire_sdk::{Client, ClientSettings, NativeLibrary};
//!
//! # fn main() -> vaultwire_sdk::SdkResult<()> {
//! let client = Client::from_library(
//!     NativeLibrary::new("/usr/lib/libvaultwire.so"),
//!     ClientSettings::default(),
//! )?;
//! client.auth().login_access_token("0.token", None)?;
//! for project in client.projects().list("org-id")? {
//!     println!("{}", project.name);
//! }
//! client.close()?;
//! # Ok(())
//! # }
//! ```

pub mod async_client;
pub mod auth;
pub mod client;
pub mod error;
pub mod generators;
pub mod logging;
pub mod platform;
pub mod projects;
pub mod response;
pub mod secrets;

pub use async_client::AsyncClient;
pub use client::{Client, ClientState};
pub use error::{ProtocolError, SdkError, SdkResult};
pub use response::{UNKNOWN_ERROR, unwrap_response};
pub use secrets::SecretInput;

pub use vaultwire_engine::{Engine, NativeLibrary, RawHandle, TransportError, TransportResult};
pub use vaultwire_schema as schema;
pub use vaultwire_schema::{ClientSettings, Command, DeviceType};
