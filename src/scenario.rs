//! The demo scenario - voice system wrapped in the adapter, handed to the bot

use crate::adapter::VoiceToTextAdapter;
use crate::bot::{CommandOutcome, SmartBot};
use crate::config::Config;
use crate::console::Console;
use crate::recognizer::VoiceSystem;
use std::io::{self, BufRead};
use tracing::debug;

pub fn run_scenario(config: &Config, console: &Console) -> CommandOutcome {
    let voice = VoiceSystem::new(&config.voice, console.clone());
    let mut adapter = VoiceToTextAdapter::new(voice, console.clone());

    let bot = SmartBot::new(console.clone());
    let outcome = bot.process_command(&mut adapter);
    debug!(?outcome, "scenario finished");
    outcome
}

/// Read and discard one line; EOF counts as done
pub fn wait_for_enter(reader: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
