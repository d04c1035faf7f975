//! Console output for progress, warnings and results.
//!
//! Colors are applied through `console`, which drops them automatically when
//! stdout is not a terminal.

use console::Style;
use std::io::{self, Write};

/// Writes user-facing messages to stdout, honouring verbose and quiet modes.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Always printed.
    pub fn println(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        self.unless_quiet(&success_line(message))
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.unless_quiet(&warning_line(message))
    }

    pub fn section(&self, title: &str) -> io::Result<()> {
        self.unless_quiet(&section_lines(title))
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.unless_quiet(&format!("    {}", Style::new().dim().apply_to(message)))
    }

    /// Printed only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            self.println(message)?;
        }
        Ok(())
    }

    fn unless_quiet(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.println(message)
    }
}

fn success_style() -> Style {
    Style::new().green().bold()
}

fn warning_style() -> Style {
    Style::new().yellow().bold()
}

fn success_line(message: &str) -> String {
    format!("{} {message}", success_style().apply_to("✓"))
}

fn warning_line(message: &str) -> String {
    format!("{} {message}", warning_style().apply_to("!"))
}

fn section_lines(title: &str) -> String {
    let rule = "-".repeat(title.chars().count());
    let bold = Style::new().bold();
    format!("\n{}\n{}", bold.apply_to(title), Style::new().dim().apply_to(rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_read_plainly_without_styling() {
        assert_eq!(console::strip_ansi_codes(&success_line("a.zip")), "✓ a.zip");
        assert_eq!(console::strip_ansi_codes(&warning_line("b failed")), "! b failed");
        assert_eq!(
            console::strip_ansi_codes(&section_lines("Packaging")),
            "\nPackaging\n---------"
        );
    }

    #[test]
    fn marks_are_colored_on_terminals() {
        let success = success_style().force_styling(true).apply_to("✓").to_string();
        let warning = warning_style().force_styling(true).apply_to("!").to_string();
        assert!(success.starts_with('\u{1b}') && success.contains("32"));
        assert!(warning.starts_with('\u{1b}') && warning.contains("33"));
    }
}
