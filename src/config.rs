use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// tracing filter directive for diagnostics on stderr
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Pause for one line of input before exiting
    #[serde(default = "default_wait_for_enter")]
    pub wait_for_enter: bool,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            wait_for_enter: default_wait_for_enter(),
            voice: VoiceConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_wait_for_enter() -> bool {
    true
}

// ============================================================================
// Voice Config
// ============================================================================

/// Settings for the simulated voice system
#[derive(Debug, Deserialize, Clone)]
pub struct VoiceConfig {
    /// Phrase the simulated recognizer "hears"
    #[serde(default = "default_phrase")]
    pub phrase: String,
    /// Name of the input device, used in log lines
    #[serde(default = "default_device")]
    pub device: String,
    /// When false, device initialization fails
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            phrase: default_phrase(),
            device: default_device(),
            available: default_available(),
        }
    }
}

fn default_phrase() -> String {
    "Open YouTube".into()
}

fn default_device() -> String {
    "Microphone".into()
}

fn default_available() -> bool {
    true
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
