//! Colored rendering of highlight segments
//!
//! `broom-core` produces plain [`Segment`] sequences; this module is the
//! single place that turns them into styled terminal output.

use std::io::{self, Write};

use broom_core::highlight::Segment;
use owo_colors::{AnsiColors, OwoColorize, Style};

/// Colors applied to matching segments
#[derive(Debug, Clone, Copy)]
pub struct ColorSpec {
    /// Foreground color for matched text
    pub foreground: AnsiColors,
    /// Optional background color for matched text
    pub background: Option<AnsiColors>,
}

impl ColorSpec {
    fn style(&self) -> Style {
        let style = Style::new().color(self.foreground);
        match self.background {
            Some(bg) => style.on_color(bg),
            None => style,
        }
    }
}

/// Write one segmented line to `out`
///
/// Matching segments get the spec's style, non-matching segments default
/// styling. Segments are written without intervening breaks and the line is
/// terminated with exactly one newline.
pub fn render_line<W: Write>(out: &mut W, segments: &[Segment], spec: &ColorSpec) -> io::Result<()> {
    for segment in segments {
        if segment.is_match {
            write!(out, "{}", segment.text.style(spec.style()))?;
        } else {
            write!(out, "{}", segment.text)?;
        }
    }
    writeln!(out)
}
