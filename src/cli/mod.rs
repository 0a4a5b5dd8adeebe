//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler returns the process exit code for its outcome.

mod detect;
mod formats;
mod schema;
mod validate;
mod view;

pub use detect::run_detect;
pub use formats::run_formats;
pub use schema::run_schema;
pub use validate::run_validate;
pub use view::run_view;

use crate::config::ViewerConfig;
use crate::pipeline::{should_use_color, OutputTarget};
use unicode_width::UnicodeWidthStr;

/// Settings shared by every command handler
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Effective configuration (file merged with CLI overrides)
    pub config: ViewerConfig,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl CommandContext {
    #[must_use]
    pub fn new(config: ViewerConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    pub(crate) fn target(&self) -> OutputTarget {
        OutputTarget::from_option(self.config.output.file.clone())
    }

    pub(crate) fn palette(&self) -> Palette {
        Palette {
            enabled: should_use_color(self.config.output.no_color, &self.target()),
        }
    }
}

/// ANSI colors, or nothing when color is disabled
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub(crate) fn ok(self, text: &str) -> String {
        self.paint("\x1b[32m", text)
    }

    pub(crate) fn warn(self, text: &str) -> String {
        self.paint("\x1b[33m", text)
    }

    pub(crate) fn error(self, text: &str) -> String {
        self.paint("\x1b[31m", text)
    }

    pub(crate) fn bold(self, text: &str) -> String {
        self.paint("\x1b[1m", text)
    }
}

/// Pad `text` with spaces to `width` terminal columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Widest display width among `items`.
pub(crate) fn column_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}
