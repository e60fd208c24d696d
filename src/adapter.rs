//! Voice-to-text adapter - lets a `VoiceRecognizer` serve as a `CommandSource`

use crate::console::Console;
use crate::error::CommandError;
use crate::recognizer::VoiceRecognizer;
use crate::source::CommandSource;
use tracing::debug;

pub struct VoiceToTextAdapter<R: VoiceRecognizer> {
    recognizer: R,
    console: Console,
}

impl<R: VoiceRecognizer> VoiceToTextAdapter<R> {
    pub fn new(recognizer: R, console: Console) -> Self {
        Self {
            recognizer,
            console,
        }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn into_inner(self) -> R {
        self.recognizer
    }

    /// Recognized speech to command text. Pass-through for now; formatting or
    /// translation would go here.
    fn convert(&self, speech: String) -> String {
        speech
    }
}

impl<R: VoiceRecognizer> CommandSource for VoiceToTextAdapter<R> {
    fn text_command(&mut self) -> Result<String, CommandError> {
        self.recognizer.initialize_device()?;

        let speech = self.recognizer.listen_and_recognize().map_err(|e| match e {
            CommandError::NoSpeechDetected => {
                CommandError::RecognitionFailed("no speech detected".into())
            }
            other => other,
        })?;

        let text = self.convert(speech);
        debug!(%text, "voice converted");
        self.console
            .adapter(format!("Voice converted to text: '{}'", text));
        Ok(text)
    }
}
