//! Highlight chunking.
//!
//! Overlapping or touching matches are merged, and the gaps between them are
//! filled with plain chunks, so the chunks always tile the text.

use serde::Serialize;

use crate::pattern::Match;

/// A contiguous byte range of the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub highlight: bool,
}

impl Chunk {
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Text split into highlighted and plain chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedText<'t> {
    text: &'t str,
    chunks: Vec<Chunk>,
}

impl<'t> HighlightedText<'t> {
    /// `matches` must hold valid char-boundary offsets into `text`; they need
    /// not be sorted or disjoint.
    pub(crate) fn from_matches(text: &'t str, matches: &[Match]) -> Self {
        let mut ranges: Vec<(usize, usize)> = matches
            .iter()
            .filter(|m| m.start < m.end)
            .map(|m| (m.start, m.end))
            .collect();
        ranges.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }

        let mut chunks = Vec::with_capacity(merged.len() * 2 + 1);
        let mut cursor = 0;
        for (start, end) in merged {
            if cursor < start {
                chunks.push(Chunk {
                    start: cursor,
                    end: start,
                    highlight: false,
                });
            }
            chunks.push(Chunk {
                start,
                end,
                highlight: true,
            });
            cursor = end;
        }
        if cursor < text.len() {
            chunks.push(Chunk {
                start: cursor,
                end: text.len(),
                highlight: false,
            });
        }

        Self { text, chunks }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn has_highlights(&self) -> bool {
        self.chunks.iter().any(|c| c.highlight)
    }

    /// The highlighted substrings, in order.
    pub fn highlighted(&self) -> impl Iterator<Item = &'t str> + '_ {
        let text = self.text;
        self.chunks
            .iter()
            .filter(|c| c.highlight)
            .map(move |c| c.slice(text))
    }

    /// Wraps each highlighted chunk in `open` / `close`.
    pub fn render(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + self.chunks.len() * (open.len() + close.len()));
        for chunk in &self.chunks {
            if chunk.highlight {
                out.push_str(open);
                out.push_str(chunk.slice(self.text));
                out.push_str(close);
            } else {
                out.push_str(chunk.slice(self.text));
            }
        }
        out
    }
}
