//! Client settings passed to the core's init entry point.

use serde::{Deserialize, Serialize};

/// Default API endpoint of the hosted service.
pub const DEFAULT_API_URL: &str = "https://api.bitwarden.com";

/// Default identity endpoint of the hosted service.
pub const DEFAULT_IDENTITY_URL: &str = "https://identity.bitwarden.com";

/// Default user agent reported by this binding.
pub const DEFAULT_USER_AGENT: &str = "Vaultwire Rust SDK";

/// Basic client behavior settings.
///
/// Consumed once when the client is constructed and never changed afterwards.
/// Absent JSON fields fall back to the production defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientSettings {
    /// Identity endpoint of the targeted instance.
    pub identity_url: String,
    /// API endpoint of the targeted instance.
    pub api_url: String,
    /// User agent the core sends with its requests.
    pub user_agent: String,
    /// Device type the core reports to the server.
    pub device_type: DeviceType,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            device_type: DeviceType::Sdk,
        }
    }
}

impl ClientSettings {
    /// Targets a self-hosted instance.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }
}

/// Device tags understood by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceType {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    ChromeExtension,
    FirefoxExtension,
    OperaExtension,
    EdgeExtension,
    WindowsDesktop,
    MacOsDesktop,
    LinuxDesktop,
    ChromeBrowser,
    FirefoxBrowser,
    OperaBrowser,
    EdgeBrowser,
    #[serde(rename = "IEBrowser")]
    IeBrowser,
    UnknownBrowser,
    AndroidAmazon,
    #[serde(rename = "UWP")]
    Uwp,
    SafariBrowser,
    VivaldiBrowser,
    VivaldiExtension,
    SafariExtension,
    #[default]
    #[serde(rename = "SDK")]
    Sdk,
}
