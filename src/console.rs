//! Console output - components push tagged lines, the renderer writes them out
//!
//! Nothing prints directly. Each component holds a cloned `Console` handle and
//! the `Renderer` drains the channel into any writer (stdout in the binary,
//! a buffer in tests).

use std::fmt;
use std::io::{self, Write};

/// Which component emitted a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    VoiceSystem,
    Adapter,
    Bot,
    /// Untagged marker line (start of a bot turn)
    Banner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub tag: Tag,
    pub text: String,
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Tag::VoiceSystem => write!(f, "[VoiceSystem] {}", self.text),
            Tag::Adapter => write!(f, "[Adapter] {}", self.text),
            Tag::Bot => write!(f, "BOT: {}", self.text),
            Tag::Banner => write!(f, "{}", self.text),
        }
    }
}

#[derive(Clone)]
pub struct Console {
    tx: flume::Sender<ConsoleLine>,
}

impl Console {
    pub fn new() -> (Self, flume::Receiver<ConsoleLine>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }

    pub fn line(&self, tag: Tag, text: impl Into<String>) {
        let _ = self.tx.send(ConsoleLine {
            tag,
            text: text.into(),
        });
    }

    pub fn voice(&self, text: impl Into<String>) {
        self.line(Tag::VoiceSystem, text);
    }

    pub fn adapter(&self, text: impl Into<String>) {
        self.line(Tag::Adapter, text);
    }

    pub fn bot(&self, text: impl Into<String>) {
        self.line(Tag::Bot, text);
    }

    pub fn banner(&self, text: impl Into<String>) {
        self.line(Tag::Banner, text);
    }
}

pub struct Renderer<W: Write> {
    out: W,
    lines_written: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
        }
    }

    pub fn handle(&mut self, line: &ConsoleLine) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every line queued so far, in send order
    pub fn drain(&mut self, rx: &flume::Receiver<ConsoleLine>) -> io::Result<usize> {
        let mut count = 0;
        for line in rx.try_iter() {
            self.handle(&line)?;
            count += 1;
        }
        self.out.flush()?;
        Ok(count)
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
