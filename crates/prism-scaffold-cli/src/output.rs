//! Terminal output.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Writes user-facing messages to stdout.
///
/// Quiet mode suppresses everything except errors.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    interactive: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let interactive = io::stdout().is_terminal();
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !interactive,
            interactive,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Success, msg)
    }

    /// `✗ <msg>` in red. Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Error, msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Warning, msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Info, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Spinner shown while files are written.
    ///
    /// Hidden when stdout is not a terminal or in quiet mode, so piped
    /// output stays clean.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || !self.interactive {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(msg.to_owned());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn marked(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet && tone != Tone::Error {
            return Ok(());
        }
        let mark = tone.mark();
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            match tone {
                Tone::Success => format!("{} {}", mark.green().bold(), msg.green()),
                Tone::Error => format!("{} {}", mark.red().bold(), msg.red()),
                Tone::Warning => format!("{} {}", mark.yellow().bold(), msg.yellow()),
                Tone::Info => format!("{} {}", mark.blue().bold(), msg.blue()),
            }
        };
        self.term.write_line(&line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

impl Tone {
    fn mark(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}
