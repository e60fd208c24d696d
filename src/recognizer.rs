use crate::config::VoiceConfig;
use crate::console::Console;
use crate::error::CommandError;
use tracing::debug;

/// Speech recognition backend, with its own two-step interface
pub trait VoiceRecognizer {
    fn initialize_device(&mut self) -> Result<(), CommandError>;
    fn listen_and_recognize(&mut self) -> Result<String, CommandError>;
}

/// Simulated voice system - always "hears" the configured phrase
pub struct VoiceSystem {
    phrase: String,
    device: String,
    available: bool,
    initialized: bool,
    console: Console,
}

impl VoiceSystem {
    pub fn new(config: &VoiceConfig, console: Console) -> Self {
        Self {
            phrase: config.phrase.clone(),
            device: config.device.clone(),
            available: config.available,
            initialized: false,
            console,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl VoiceRecognizer for VoiceSystem {
    fn initialize_device(&mut self) -> Result<(), CommandError> {
        if !self.available {
            debug!(device = %self.device, "device not available");
            return Err(CommandError::DeviceUnavailable(self.device.clone()));
        }
        self.initialized = true;
        self.console.voice(format!("{} on.", self.device));
        Ok(())
    }

    fn listen_and_recognize(&mut self) -> Result<String, CommandError> {
        if !self.initialized {
            return Err(CommandError::DeviceUnavailable(format!(
                "{} not initialized",
                self.device
            )));
        }
        self.console.voice("Listening...");

        let text = self.phrase.trim();
        if text.is_empty() {
            return Err(CommandError::NoSpeechDetected);
        }
        debug!(chars = text.len(), "speech recognized");
        Ok(self.phrase.clone())
    }
}
