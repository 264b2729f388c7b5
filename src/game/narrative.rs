//! Narrative text produced by town operations.
//!
//! The core never emits terminal escape codes. Each piece of text carries a
//! [`Tone`] and the front end decides how (or whether) to color it.

use std::fmt;

use serde::Serialize;

/// How a piece of narrative should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Ordinary text.
    Plain,
    /// Threats and fights.
    Danger,
    /// Gold amounts.
    Gold,
}

/// A run of text sharing one tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Emphasis for this run.
    pub tone: Tone,
    /// The text itself.
    pub text: String,
}

/// The message describing the latest town action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Narrative {
    segments: Vec<Segment>,
}

impl Narrative {
    /// Create an empty narrative.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Drop everything written so far.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Append plain text.
    pub fn push(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_toned(Tone::Plain, text)
    }

    /// Append text with the given tone. Adjacent runs of the same tone merge.
    pub fn push_toned(&mut self, tone: Tone, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(last) if last.tone == tone => last.text.push_str(&text),
            _ => self.segments.push(Segment { tone, text }),
        }
        self
    }

    /// Start a new line of plain text.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.newline().push(text)
    }

    /// Append a line break unless the narrative is empty.
    pub fn newline(&mut self) -> &mut Self {
        if !self.is_empty() {
            self.push("\n");
        }
        self
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Toned runs in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}
