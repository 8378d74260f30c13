//! Colored status messages

use crossterm::style::Stylize;

/// Formats status messages, optionally with ANSI colors
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    use_color: bool,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn success(&self, message: &str) -> String {
        if self.use_color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn warning(&self, message: &str) -> String {
        if self.use_color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn error(&self, message: &str) -> String {
        if self.use_color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn heading(&self, message: &str) -> String {
        if self.use_color {
            message.bold().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
