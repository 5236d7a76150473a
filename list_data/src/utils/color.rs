use colored::*;
use std::env;

/// Whether stderr diagnostics are coloured for this run.
#[derive(Debug, Clone, Copy)]
pub struct ColorState {
    enabled: bool,
}

impl ColorState {
    pub fn new(no_color: bool) -> Self {
        let enabled =
            !no_color && env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr);
        Self { enabled }
    }

    fn stylize(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = text.color(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Diagnostics written to stderr. Listings themselves go to stdout untouched.
pub struct Diagnostics {
    color: ColorState,
    verbose: bool,
}

impl Diagnostics {
    pub fn new(color: ColorState, verbose: bool) -> Self {
        Self { color, verbose }
    }

    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!(
                "{} {}",
                self.color.stylize("→", Color::BrightBlue, false),
                self.color.stylize(message, Color::BrightBlack, false)
            );
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!(
            "{} {}",
            self.color.stylize("!", Color::Yellow, true),
            message
        );
    }

    pub fn error(&self, kind: &str, message: &str) {
        eprintln!();
        eprintln!(
            "{} {}",
            self.color.stylize("✗", Color::BrightRed, false),
            self.color.stylize(kind, Color::BrightRed, true)
        );
        eprintln!();
        for line in message.lines() {
            eprintln!("  {}", line);
        }
        eprintln!();
    }
}
