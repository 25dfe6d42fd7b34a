//! Data types shared by the normalizer and the scanner.
//!
//! A [`Citation`] is the unit the scanner produces; [`Context`] is the
//! "current book and chapter" threaded through continuation steps; and
//! [`References`] is the ordered, deduplicated output.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `(book, chapter, verse)` triple extracted from text.
///
/// `book` is always a canonical name (or an unknown name passed through by
/// the normalizer). `chapter` and `verse` are always `>= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Citation {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// The book and chapter that elliptical continuations resolve against.
///
/// Each scan step consumes a `Context` and hands back a new one; nothing
/// mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub book: String,
    pub chapter: u32,
}

impl Context {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }

    /// Same book, different chapter.
    pub fn with_chapter(self, chapter: u32) -> Self {
        Self { chapter, ..self }
    }

    pub fn cite(&self, verse: u32) -> Citation {
        Citation::new(self.book.clone(), self.chapter, verse)
    }
}

/// Insertion-ordered set of citations keyed by their formatted form.
///
/// The first occurrence of a reference wins; later duplicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct References {
    items: Vec<Citation>,
    seen: HashSet<String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `citation` unless an identical reference is already present.
    /// Returns `true` when it was added.
    pub fn push(&mut self, citation: Citation) -> bool {
        if self.seen.insert(citation.to_string()) {
            self.items.push(citation);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn citations(&self) -> &[Citation] {
        &self.items
    }

    /// Formatted `"Book Chapter:Verse"` strings in first-seen order.
    pub fn into_strings(self) -> Vec<String> {
        self.items.iter().map(Citation::to_string).collect()
    }
}

impl Extend<Citation> for References {
    fn extend<T: IntoIterator<Item = Citation>>(&mut self, iter: T) {
        for citation in iter {
            self.push(citation);
        }
    }
}
