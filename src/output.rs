//! Console messaging.
//!
//! Progress goes to stdout, errors and hints to stderr. ANSI colors are
//! used only when `NO_COLOR` is unset and stdout is a terminal.

use std::io::{self, IsTerminal, Write};

/// Message category, mapped to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Hint,
    Error,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Hint => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    /// Colors on when attached to a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            color: std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }

    /// No escape sequences.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn paint(&self, tone: Tone, message: &str) -> String {
        if self.color {
            format!("{}{}{}", tone.ansi(), message, RESET)
        } else {
            message.to_string()
        }
    }

    /// `→ message` on `out`.
    pub fn status<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.paint(Tone::Info, &format!("→ {}", message)))
    }

    /// `✗ message` followed by `hint:` lines, on stderr.
    pub fn report_error(&self, message: &str, hints: &[String]) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", self.paint(Tone::Error, &format!("✗ {}", message)));
        for hint in hints {
            let _ = writeln!(err, "{}", self.paint(Tone::Hint, &format!("hint: {}", hint)));
        }
    }
}
