//! Line segmentation for terminal highlighting
//!
//! Splits a single line of text into alternating non-matching/matching
//! segments so the caller can draw the matching spans in color. This module
//! is pure: it never writes to the terminal. Rendering (applying a style to
//! each segment) is the caller's job.

use regex::Regex;

use crate::error::BroomError;

/// A compiled highlight pattern
///
/// Literal patterns are escaped before compilation, so `feature/x` matches
/// the text `feature/x` and nothing else. Regex patterns are compiled as
/// written and fail with [`BroomError::InvalidPattern`] when malformed.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a literal substring pattern
    pub fn literal(text: &str) -> Result<Self, BroomError> {
        Self::compile(&regex::escape(text), text)
    }

    /// Compile a regular expression pattern
    pub fn regex(pattern: &str) -> Result<Self, BroomError> {
        Self::compile(pattern, pattern)
    }

    fn compile(pattern: &str, original: &str) -> Result<Self, BroomError> {
        let regex = Regex::new(pattern).map_err(|e| BroomError::InvalidPattern {
            pattern: original.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub(crate) fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// One span of a segmented line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The span text; concatenating all segments reconstructs the line
    pub text: String,
    /// Whether this span matched the pattern
    pub is_match: bool,
}

impl Segment {
    fn new(text: &str, is_match: bool) -> Self {
        Self {
            text: text.to_string(),
            is_match,
        }
    }
}

/// Split one line into highlight segments
///
/// With `whole_line` set, the entire line becomes a single segment marked as
/// matching iff the pattern matches anywhere in it. Otherwise the line is
/// partitioned around every non-overlapping match: the result alternates
/// non-match/match/non-match/..., always beginning and ending with a
/// (possibly empty) non-matching segment, so N matches yield exactly 2N+1
/// segments. A line with no matches yields a single non-matching segment.
///
/// Multi-line text must be split by the caller first; matching never crosses
/// a line boundary here.
pub fn segment_line(line: &str, pattern: &Pattern, whole_line: bool) -> Vec<Segment> {
    if whole_line {
        return vec![Segment::new(line, pattern.is_match(line))];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in pattern.as_regex().find_iter(line) {
        // Zero-width matches would loop forever under manual cursor
        // advancement; treat them as no match at all.
        if m.start() == m.end() {
            continue;
        }
        segments.push(Segment::new(&line[cursor..m.start()], false));
        segments.push(Segment::new(m.as_str(), true));
        cursor = m.end();
    }
    segments.push(Segment::new(&line[cursor..], false));
    segments
}
