//! Client configuration.

use serde::{Deserialize, Serialize};

/// Page opened in a fresh tab.
pub const DEFAULT_START_PAGE: &str = "gemini://gemini.circumlunar.space/";

/// Ports and start page used when planning requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port for `gemini://` URLs without one.
    pub gemini_port: u16,
    /// Port for `gopher://` URLs without one.
    pub gopher_port: u16,
    /// Port for `finger://` URLs without one.
    pub finger_port: u16,
    /// URL of the start page.
    pub start_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_port: smolweb_gemini::DEFAULT_PORT,
            gopher_port: smolweb_gopher::DEFAULT_PORT,
            finger_port: smolweb_finger::DEFAULT_PORT,
            start_page: DEFAULT_START_PAGE.to_string(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    gemini_port: Option<u16>,
    gopher_port: Option<u16>,
    finger_port: Option<u16>,
    start_page: Option<String>,
}

impl ConfigBuilder {
    /// Sets the default Gemini port.
    #[must_use]
    pub const fn gemini_port(mut self, port: u16) -> Self {
        self.gemini_port = Some(port);
        self
    }

    /// Sets the default Gopher port.
    #[must_use]
    pub const fn gopher_port(mut self, port: u16) -> Self {
        self.gopher_port = Some(port);
        self
    }

    /// Sets the default Finger port.
    #[must_use]
    pub const fn finger_port(mut self, port: u16) -> Self {
        self.finger_port = Some(port);
        self
    }

    /// Sets the start page.
    #[must_use]
    pub fn start_page(mut self, url: impl Into<String>) -> Self {
        self.start_page = Some(url.into());
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            gemini_port: self.gemini_port.unwrap_or(defaults.gemini_port),
            gopher_port: self.gopher_port.unwrap_or(defaults.gopher_port),
            finger_port: self.finger_port.unwrap_or(defaults.finger_port),
            start_page: self.start_page.unwrap_or(defaults.start_page),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.gemini_port, 1965);
        assert_eq!(config.gopher_port, 70);
        assert_eq!(config.finger_port, 79);
        assert_eq!(config.start_page, "gemini://gemini.circumlunar.space/");
    }

    #[test]
    fn builder_overrides() {
        let config = Config::builder()
            .gemini_port(1966)
            .start_page("gemini://localhost/")
            .build();
        assert_eq!(config.gemini_port, 1966);
        assert_eq!(config.gopher_port, 70);
        assert_eq!(config.start_page, "gemini://localhost/");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"finger_port": 7979}"#).unwrap();
        assert_eq!(config.finger_port, 7979);
        assert_eq!(config.gemini_port, 1965);
        assert_eq!(config.start_page, DEFAULT_START_PAGE);
    }

    #[test]
    fn json_round_trip() {
        let config = Config::builder().gopher_port(7070).build();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
