//! Semantic color theme for consistent terminal output
//!
//! Centralized color constants with semantic meaning:
//! - `ACTIVE` => cyan - headers, prompts
//! - `SUCCESS` => green - completed deletions, clean reports
//! - `WARNING` => yellow - bad input, per-branch deletion failures
//! - `FAIL` => red - hard errors
//! - `MARKED` => the highlight spec applied to rows marked for deletion

use std::sync::LazyLock;

use owo_colors::{AnsiColors, Style};

use crate::render::ColorSpec;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Cyan - headers, prompts
    pub active: Style,
    /// Green - completed operations, success messages
    pub success: Style,
    /// Yellow - warnings, recoverable problems
    pub warning: Style,
    /// Red - errors
    pub fail: Style,
    /// Highlight spec for table rows marked for deletion
    pub marked: ColorSpec,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            active: Style::new().cyan().bold(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
            marked: ColorSpec {
                foreground: AnsiColors::Black,
                background: Some(AnsiColors::Yellow),
            },
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_global_is_accessible() {
        let _ = &COLORS.active;
        let _ = &COLORS.success;
        let _ = &COLORS.warning;
        let _ = &COLORS.fail;
        assert!(COLORS.marked.background.is_some());
    }
}
