//! # Step Segmenter
//!
//! Accumulates the streamed answer and, once the stream is complete, cuts it
//! into the steps shown as result cards.
//!
//! ## Delimiter grammar
//!
//! ```text
//! marker := "Step" ws+ digit+ ":"
//! ws     := any Unicode whitespace
//! digit  := '0'..='9'
//! ```
//!
//! Markers are found left to right and never overlap. A partial match
//! (`"Step one:"`, `"Step 3"` with no colon) is ordinary text. The marker
//! itself is dropped, along with everything before the first one. The number
//! in the marker is ignored: steps keep the order in which they appear and
//! are labeled by position.
//!
//! ## Cleaning
//!
//! The model is asked for plain prose but still emits LaTeX-style fragments
//! now and then. Each segment is trimmed, stripped of `\[`, `\]`, `\text{`,
//! `}` and `$`, and then reduced to its non-blank lines, each trimmed.
//! Segments with nothing left are dropped.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

const MARKER_WORD: &str = "Step";

/// One cleaned section of the model's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStep {
    /// 0-based position in the answer
    pub index: usize,
    pub text: String,
}

impl AnalysisStep {
    /// Card label, `Step {index + 1}`
    pub fn label(&self) -> String {
        format!("Step {}", self.index + 1)
    }
}

/// What to produce when an answer contains no step markers at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingMarkerPolicy {
    /// No steps; the results view shows its placeholder
    #[default]
    Empty,
    /// The whole cleaned answer becomes a single step
    SingleBlock,
    /// Report [`BeamError::NoStepsFound`]
    Error,
}

impl MissingMarkerPolicy {
    pub const ALL: [MissingMarkerPolicy; 3] = [
        MissingMarkerPolicy::Empty,
        MissingMarkerPolicy::SingleBlock,
        MissingMarkerPolicy::Error,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MissingMarkerPolicy::Empty => "empty",
            MissingMarkerPolicy::SingleBlock => "single-block",
            MissingMarkerPolicy::Error => "error",
        }
    }
}

impl fmt::Display for MissingMarkerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MissingMarkerPolicy {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MissingMarkerPolicy::ALL
            .into_iter()
            .find(|policy| policy.code() == s)
            .ok_or_else(|| {
                BeamError::invalid_input(
                    "missing_marker_policy",
                    s,
                    "Expected one of: empty, single-block, error",
                )
            })
    }
}

/// Byte ranges of every step marker in `text`, in order.
pub fn find_markers(text: &str) -> Vec<Range<usize>> {
    let mut markers = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(MARKER_WORD) {
        let start = search_from + offset;
        match marker_end(text, start + MARKER_WORD.len()) {
            Some(end) => {
                markers.push(start..end);
                search_from = end;
            }
            None => search_from = start + MARKER_WORD.len(),
        }
    }

    markers
}

/// Given the byte offset just past `"Step"`, return the offset just past the
/// closing colon if `ws+ digit+ ":"` follows.
fn marker_end(text: &str, mut pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let ws_len: usize = rest
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    if ws_len == 0 {
        return None;
    }
    pos += ws_len;

    let digits = text[pos..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    pos += digits;

    if text[pos..].starts_with(':') {
        Some(pos + 1)
    } else {
        None
    }
}

/// Strip LaTeX-style artifacts and blank lines from one segment.
///
/// ```rust
/// use beam_core::segmenter::clean_segment;
///
/// assert_eq!(clean_segment(r"\[ \text{Force} = 10N \]"), "Force = 10N");
/// ```
pub fn clean_segment(raw: &str) -> String {
    let stripped = strip_display_delimiters(raw.trim())
        .replace("\\text{", "")
        .replace('}', "")
        .replace('$', "");

    stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove `\[` and `\]` in one left-to-right pass.
fn strip_display_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Split a complete answer into cleaned steps.
///
/// Text before the first marker is discarded, so an answer without any
/// marker yields no steps. Only segments with no text at all between two
/// markers are skipped; one that cleans down to nothing is kept as an empty
/// step so later steps keep their position.
///
/// ```rust
/// use beam_core::segmenter::split_steps;
///
/// let steps = split_steps("Step 1: A\nStep 2: B");
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[1].label(), "Step 2");
/// assert_eq!(steps[1].text, "B");
/// ```
pub fn split_steps(text: &str) -> Vec<AnalysisStep> {
    let markers = find_markers(text);

    let segments = markers.iter().enumerate().map(|(i, marker)| {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        &text[marker.end..end]
    });

    segments
        .filter(|raw| !raw.is_empty())
        .map(clean_segment)
        .enumerate()
        .map(|(index, text)| AnalysisStep { index, text })
        .collect()
}

/// Split an answer, applying `policy` when it contains no markers.
pub fn segment(text: &str, policy: MissingMarkerPolicy) -> BeamResult<Vec<AnalysisStep>> {
    if !find_markers(text).is_empty() {
        return Ok(split_steps(text));
    }

    match policy {
        MissingMarkerPolicy::Empty => Ok(Vec::new()),
        MissingMarkerPolicy::SingleBlock => {
            let cleaned = clean_segment(text);
            if cleaned.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![AnalysisStep { index: 0, text: cleaned }])
            }
        }
        MissingMarkerPolicy::Error => Err(BeamError::NoStepsFound {
            length: text.chars().count(),
        }),
    }
}

/// Growing transcript of a streamed answer.
///
/// Chunks are appended in arrival order; [`Transcript::text`] is the live
/// view, [`Transcript::finish`] segments the final text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
    chunks: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return the text so far
    pub fn push(&mut self, chunk: &str) -> &str {
        self.text.push_str(chunk);
        self.chunks += 1;
        &self.text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of chunks received
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Segment the complete transcript
    pub fn finish(&self, policy: MissingMarkerPolicy) -> BeamResult<Vec<AnalysisStep>> {
        segment(&self.text, policy)
    }
}
