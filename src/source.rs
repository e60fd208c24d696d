//! Text command sources - anything the bot can ask for its next command

use crate::error::CommandError;
use std::io::BufRead;

/// Produces plain text commands for the bot
pub trait CommandSource {
    fn text_command(&mut self) -> Result<String, CommandError>;
}

/// Typed commands, one per line
pub struct KeyboardInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> KeyboardInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> CommandSource for KeyboardInput<R> {
    fn text_command(&mut self) -> Result<String, CommandError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| CommandError::RecognitionFailed(e.to_string()))?;
        if read == 0 {
            return Err(CommandError::RecognitionFailed("end of input".into()));
        }

        let command = line.trim();
        if command.is_empty() {
            return Err(CommandError::RecognitionFailed("empty command".into()));
        }
        Ok(command.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_line_per_call() {
        let mut input = KeyboardInput::new(Cursor::new("open mail\r\nplay music\n"));
        assert_eq!(input.text_command().unwrap(), "open mail");
        assert_eq!(input.text_command().unwrap(), "play music");
    }

    #[test]
    fn test_eof() {
        let mut input = KeyboardInput::new(Cursor::new(""));
        assert_eq!(
            input.text_command(),
            Err(CommandError::RecognitionFailed("end of input".into()))
        );
    }

    #[test]
    fn test_blank_line() {
        let mut input = KeyboardInput::new(Cursor::new("   \n"));
        assert!(matches!(
            input.text_command(),
            Err(CommandError::RecognitionFailed(_))
        ));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = KeyboardInput::new(Cursor::new("stop"));
        assert_eq!(input.text_command().unwrap(), "stop");
    }
}
