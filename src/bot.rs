use crate::console::Console;
use crate::error::CommandError;
use crate::source::CommandSource;
use tracing::warn;

pub const START_MARKER: &str = "--- Bot awaiting command ---";

/// Result of one bot turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command was received and executed (uppercased text)
    Executed(String),
    /// Source could not produce a command; reported to the user
    NotUnderstood(CommandError),
}

/// Client that only understands text commands
pub struct SmartBot {
    console: Console,
}

impl SmartBot {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Ask the source for one command and execute it
    pub fn process_command(&self, source: &mut dyn CommandSource) -> CommandOutcome {
        self.console.banner("");
        self.console.banner(START_MARKER);

        match source.text_command() {
            Ok(command) => {
                let command = command.to_uppercase();
                self.console
                    .bot(format!("Executing command: >> {} <<", command));
                CommandOutcome::Executed(command)
            }
            Err(e) => {
                warn!(error = %e, "command source failed");
                if e.is_recoverable() {
                    self.console.bot(format!("Command not understood ({})", e));
                } else {
                    self.console.bot(format!("Voice input unavailable ({})", e));
                }
                CommandOutcome::NotUnderstood(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ConsoleLine;

    struct Fixed {
        reply: Result<String, CommandError>,
        calls: usize,
    }

    impl Fixed {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: 0,
            }
        }
    }

    impl CommandSource for Fixed {
        fn text_command(&mut self) -> Result<String, CommandError> {
            self.calls += 1;
            self.reply.clone()
        }
    }

    fn lines(rx: &flume::Receiver<ConsoleLine>) -> Vec<String> {
        rx.try_iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_uppercases_command() {
        let (console, rx) = Console::new();
        let bot = SmartBot::new(console);
        let mut source = Fixed::ok("Test");

        assert_eq!(
            bot.process_command(&mut source),
            CommandOutcome::Executed("TEST".into())
        );
        assert_eq!(source.calls, 1);
        assert_eq!(
            lines(&rx),
            vec!["", START_MARKER, "BOT: Executing command: >> TEST <<"]
        );
    }

    #[test]
    fn test_one_request_per_turn() {
        let (console, _rx) = Console::new();
        let bot = SmartBot::new(console);
        let mut source = Fixed::ok("a");
        bot.process_command(&mut source);
        bot.process_command(&mut source);
        assert_eq!(source.calls, 2);
    }

    #[test]
    fn test_recoverable_failure() {
        let (console, rx) = Console::new();
        let bot = SmartBot::new(console);
        let err = CommandError::RecognitionFailed("empty command".into());
        let mut source = Fixed {
            reply: Err(err.clone()),
            calls: 0,
        };

        assert_eq!(
            bot.process_command(&mut source),
            CommandOutcome::NotUnderstood(err)
        );
        assert_eq!(
            lines(&rx).last().unwrap(),
            "BOT: Command not understood (recognition failed: empty command)"
        );
    }

    #[test]
    fn test_device_failure() {
        let (console, rx) = Console::new();
        let bot = SmartBot::new(console);
        let mut source = Fixed {
            reply: Err(CommandError::DeviceUnavailable("Microphone".into())),
            calls: 0,
        };

        bot.process_command(&mut source);
        assert_eq!(
            lines(&rx).last().unwrap(),
            "BOT: Voice input unavailable (device unavailable: Microphone)"
        );
    }

    #[test]
    fn test_unicode_uppercase() {
        let (console, _rx) = Console::new();
        let bot = SmartBot::new(console);
        assert_eq!(
            bot.process_command(&mut Fixed::ok("Відкрити YouTube")),
            CommandOutcome::Executed("ВІДКРИТИ YOUTUBE".into())
        );
    }
}
