//! Colored terminal output for packager progress.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Manages sectioned, colored progress output on stdout.
///
/// Color is resolved per stream via [`ColorChoice::Auto`], so piped output
/// stays plain.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a plain message if not in quiet mode
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "{}", message)
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(stdout, "{}", message)?;
        stdout.reset()
    }

    /// Print a success message with a green check mark
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "✓ ")?;
        stdout.reset()?;
        writeln!(stdout, "{}", message)
    }

    /// Print a warning message in yellow
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(stdout, "warning: ")?;
        stdout.reset()?;
        writeln!(stdout, "{}", message)
    }

    /// Print a progress message with a cyan arrow
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "→ ")?;
        stdout.reset()?;
        writeln!(stdout, "{}", message)
    }

    /// Print a bold section header preceded by a blank line
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout)?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "{}", title)?;
        stdout.reset()
    }

    /// Print indented text, used for streamed child-process output
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "    {}", message)
    }
}
