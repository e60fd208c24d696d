//! Voice commands for a text-only bot, via an adapter over the voice system

pub mod adapter;
pub mod bot;
pub mod config;
pub mod console;
pub mod error;
pub mod recognizer;
pub mod scenario;
pub mod source;

pub use adapter::VoiceToTextAdapter;
pub use bot::{CommandOutcome, SmartBot};
pub use config::Config;
pub use console::{Console, Renderer};
pub use error::CommandError;
pub use recognizer::{VoiceRecognizer, VoiceSystem};
pub use source::{CommandSource, KeyboardInput};
