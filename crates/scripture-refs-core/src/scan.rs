//! Citation scanner.
//!
//! Extracts Scripture citations from loosely punctuated prose and expands
//! them into a flat, deduplicated list of fully qualified references.
//!
//! # Algorithm
//!
//! The scan is a single left-to-right pass with two states:
//!
//! 1. **Seek.** Find the next `:` at or after the cursor. Read the verse
//!    (and optional range) forward from it, the chapter digits backward, then
//!    the book token backward over letters, periods, and spaces, at most
//!    four words. Candidate book starts are capitalized words of two or more
//!    characters, optionally preceded by a `1`–`3` numeral. The leftmost candidate the alias table knows wins; with no
//!    known candidate, the capitalized word nearest the number is used.
//!    Emit the citation and set the [`Context`].
//! 2. **Continue.** Extend the context through delimiters:
//!    - `, V[-V2]` — more verses in the current chapter.
//!    - `; C:V[-V2]` — a new chapter in the current book. Tried first.
//!    - `; Book C:V[-V2]` — a new book, chosen as in seek and starting
//!      right after the `;`.
//!
//!    Anything else ends the chain and the scan seeks again from there.
//!
//! Every emitted reference goes through [`References`], so the first
//! occurrence of a reference wins across the whole scan. Each step either
//! advances the cursor or ends, so the scan is linear in the input length.
//!
//! # Example
//!
//! ```rust
//! use scripture_refs_core::scan::extract_references;
//!
//! assert_eq!(
//!     extract_references("Gen. 1:1-3"),
//!     vec!["Genesis 1:1", "Genesis 1:2", "Genesis 1:3"]
//! );
//! ```

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::books::BookAliases;
use crate::models::{Context, References};

/// Largest chapter or verse number accepted by default.
pub const DEFAULT_MAX_NUMBER: u32 = 999;

/// Hard upper bound for [`ScanOptions::max_number`]. Larger settings are
/// clamped so a single range can never expand past this many verses.
pub const MAX_NUMBER_CEILING: u32 = 10_000;

/// Digit runs longer than this are never numbers.
const MAX_DIGITS: usize = 9;

/// Words considered before a chapter number when locating a book name.
/// The longest canonical name ("Song of Solomon") has three.
const MAX_BOOK_WORDS: usize = 4;

const EN_DASH: char = '\u{2013}';

/// What to do when a `,` is not followed by a verse number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenContinuation {
    /// End the current chain and seek again after the comma.
    #[default]
    Reseek,
    /// Stop scanning and return what has been collected.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Chapter and verse numbers above this bound do not match. Clamped to
    /// [`MAX_NUMBER_CEILING`].
    pub max_number: u32,
    pub on_broken_comma: BrokenContinuation,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
            on_broken_comma: BrokenContinuation::default(),
        }
    }
}

/// Extract references from `text` with the built-in alias table.
pub fn extract_references(text: &str) -> Vec<String> {
    Scanner::new(BookAliases::standard()).extract(text)
}

/// Citation scanner over an injected alias table.
///
/// Holds no per-scan state; one scanner can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    books: &'a BookAliases,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(books: &'a BookAliases) -> Self {
        Self::with_options(books, ScanOptions::default())
    }

    pub fn with_options(books: &'a BookAliases, options: ScanOptions) -> Self {
        Self { books, options }
    }

    /// Formatted `"Book Chapter:Verse"` references in first-seen order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.scan(text).into_strings()
    }

    /// Scan `text` and collect every citation it contains.
    pub fn scan(&self, text: &str) -> References {
        let lexer = Lexer::new(text, self.options.max_number);
        let mut refs = References::new();
        let mut cursor = 0;

        while let Some(head) = self.seek(&lexer, cursor) {
            let end = head.end;
            let ctx = self.emit_head(&lexer, head, &mut refs);
            match self.continue_chain(&lexer, end, ctx, &mut refs) {
                ChainEnd::Resume(pos) => cursor = pos,
                ChainEnd::Halt => break,
            }
        }

        refs
    }

    /// Find the first full citation whose book token starts at or after `from`.
    fn seek(&self, lexer: &Lexer<'_>, from: usize) -> Option<Head> {
        let mut pos = from;
        while let Some(colon) = lexer.find_colon(pos) {
            if let Some(head) = self.head_at_colon(lexer, from, colon) {
                return Some(head);
            }
            pos = colon + 1;
        }
        None
    }

    /// Walk outward from a colon: verses forward, chapter and book backward.
    fn head_at_colon(&self, lexer: &Lexer<'_>, floor: usize, colon: usize) -> Option<Head> {
        let (verses, end) = lexer.verses(colon + 1)?;

        let digits_end = lexer.skip_ws_back(floor, colon);
        let digits_start = lexer.back_while(floor, digits_end, |b| b.is_ascii_digit());
        if digits_start == digits_end {
            return None;
        }
        let (chapter, _) = lexer.number(digits_start)?;

        let book_end = lexer.skip_ws_back(floor, digits_start);
        let book_start = lexer.book_run_start(floor, book_end);
        let book = self.pick_book(lexer, floor, book_start..book_end)?;

        Some(Head {
            book,
            chapter,
            verses,
            end,
        })
    }

    /// `Book C:V[-V2]` whose book token starts exactly at `at`, chosen the
    /// same way a seek would choose it.
    fn book_citation_at(&self, lexer: &Lexer<'_>, at: usize) -> Option<Head> {
        let (letters, chapter, verses, end) = lexer.anchored_citation(at)?;
        let book_end = lexer.skip_ws_back(letters.start, letters.end);
        let run = lexer.book_run_start(letters.start, book_end)..book_end;
        let book = self.pick_book(lexer, at, run)?;
        if book.start != at {
            return None;
        }
        Some(Head {
            book,
            chapter,
            verses,
            end,
        })
    }

    /// Choose where the book token begins inside a run of book bytes.
    ///
    /// Candidates are capitalized words of two or more characters; the run is
    /// at most [`MAX_BOOK_WORDS`] words, so this is bounded per colon.
    fn pick_book(&self, lexer: &Lexer<'_>, floor: usize, run: Range<usize>) -> Option<Range<usize>> {
        let bytes = lexer.bytes;
        let mut fallback = None;

        for p in run.clone() {
            let starts_word = p == run.start || !bytes[p - 1].is_ascii_alphabetic();
            let long_enough = p + 1 < run.end && is_word_byte(bytes[p + 1]);
            if !starts_word || !bytes[p].is_ascii_uppercase() || !long_enough {
                continue;
            }
            let numbered = lexer.numeral_before(floor, p);
            if let Some(q) = numbered {
                if self.books.is_known(lexer.slice(q..run.end)) {
                    return Some(q..run.end);
                }
            }
            if self.books.is_known(lexer.slice(p..run.end)) {
                return Some(p..run.end);
            }
            fallback = Some(numbered.unwrap_or(p)..run.end);
        }

        fallback
    }

    fn emit_head(&self, lexer: &Lexer<'_>, head: Head, refs: &mut References) -> Context {
        let book = self.books.normalize(lexer.slice(head.book));
        let ctx = Context::new(book, head.chapter);
        emit(&ctx, head.verses, refs);
        ctx
    }

    fn continue_chain(
        &self,
        lexer: &Lexer<'_>,
        mut pos: usize,
        mut ctx: Context,
        refs: &mut References,
    ) -> ChainEnd {
        loop {
            match self.step(lexer, pos, ctx, refs) {
                Step::Advance(next, next_ctx) => {
                    pos = next;
                    ctx = next_ctx;
                }
                Step::End(next) => return ChainEnd::Resume(next),
                Step::Halt => return ChainEnd::Halt,
            }
        }
    }

    /// Consume one continuation after `pos`, yielding the context for the next.
    fn step(&self, lexer: &Lexer<'_>, pos: usize, ctx: Context, refs: &mut References) -> Step {
        let j = lexer.skip_ws(pos);
        match lexer.byte(j) {
            Some(b',') => {
                let after = j + 1;
                match lexer.verses(after) {
                    Some((verses, end)) => {
                        emit(&ctx, verses, refs);
                        Step::Advance(end, ctx)
                    }
                    None => match self.options.on_broken_comma {
                        BrokenContinuation::Reseek => Step::End(after),
                        BrokenContinuation::Stop => Step::Halt,
                    },
                }
            }
            Some(b';') => {
                let after = j + 1;
                if let Some((chapter, verses, end)) = lexer.chapter_verses(after) {
                    let ctx = ctx.with_chapter(chapter);
                    emit(&ctx, verses, refs);
                    return Step::Advance(end, ctx);
                }
                match self.book_citation_at(lexer, lexer.skip_ws(after)) {
                    Some(head) => {
                        let end = head.end;
                        Step::Advance(end, self.emit_head(lexer, head, refs))
                    }
                    None => Step::End(after),
                }
            }
            _ => Step::End(j),
        }
    }
}

fn emit(ctx: &Context, verses: VerseSpan, refs: &mut References) {
    for verse in verses.iter() {
        refs.push(ctx.cite(verse));
    }
}

fn is_book_byte(b: u8) -> bool {
    is_word_byte(b) || b == b' '
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'.'
}

/// A full `Book Chapter:Verse[-Verse]` citation located in the text.
#[derive(Debug, Clone)]
struct Head {
    book: Range<usize>,
    chapter: u32,
    verses: VerseSpan,
    end: usize,
}

/// Inclusive verse range. A reversed range keeps only its first verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VerseSpan {
    first: u32,
    last: u32,
}

impl VerseSpan {
    fn iter(self) -> RangeInclusive<u32> {
        self.first..=self.last.max(self.first)
    }
}

enum Step {
    Advance(usize, Context),
    End(usize),
    Halt,
}

enum ChainEnd {
    Resume(usize),
    Halt,
}

/// Byte-level token readers. Every position handed out lies on an ASCII
/// byte or at the end of the text, so slicing between them is always valid.
struct Lexer<'t> {
    text: &'t str,
    bytes: &'t [u8],
    max_number: u32,
}

impl<'t> Lexer<'t> {
    fn new(text: &'t str, max_number: u32) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            max_number: max_number.min(MAX_NUMBER_CEILING),
        }
    }

    fn byte(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    fn slice(&self, range: Range<usize>) -> &'t str {
        &self.text[range]
    }

    fn find_colon(&self, from: usize) -> Option<usize> {
        self.bytes
            .get(from..)?
            .iter()
            .position(|&b| b == b':')
            .map(|off| from + off)
    }

    fn skip_ws(&self, mut i: usize) -> usize {
        while self.byte(i).is_some_and(|b| b.is_ascii_whitespace()) {
            i += 1;
        }
        i
    }

    fn skip_ws_back(&self, floor: usize, end: usize) -> usize {
        self.back_while(floor, end, |b| b.is_ascii_whitespace())
    }

    /// Leftmost `i >= floor` such that every byte in `i..end` satisfies `pred`.
    fn back_while(&self, floor: usize, end: usize, pred: impl Fn(u8) -> bool) -> usize {
        let mut i = end;
        while i > floor && pred(self.bytes[i - 1]) {
            i -= 1;
        }
        i
    }

    /// Start of the book run ending at `end`: spaces and words of letters and
    /// periods, at most [`MAX_BOOK_WORDS`] words back and never before `floor`.
    fn book_run_start(&self, floor: usize, end: usize) -> usize {
        let mut i = end;
        let mut words = 0;
        while i > floor && words < MAX_BOOK_WORDS {
            let word_end = i;
            i = self.back_while(floor, i, is_word_byte);
            if i < word_end {
                words += 1;
            }
            let spaces_end = i;
            i = self.back_while(floor, i, |b| b == b' ');
            if i == spaces_end && i == word_end {
                break;
            }
        }
        i
    }

    /// A standalone `1`–`3` numeral separated from `word` only by spaces.
    fn numeral_before(&self, floor: usize, word: usize) -> Option<usize> {
        let s = self.back_while(floor, word, |b| b == b' ');
        if s == floor {
            return None;
        }
        let q = s - 1;
        let standalone = q == floor || !self.bytes[q - 1].is_ascii_alphanumeric();
        (matches!(self.bytes[q], b'1'..=b'3') && standalone).then_some(q)
    }

    /// Decimal run at `i` within `1..=max_number`.
    fn number(&self, i: usize) -> Option<(u32, usize)> {
        let len = self
            .bytes
            .get(i..)?
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 || len > MAX_DIGITS {
            return None;
        }
        let value = self.bytes[i..i + len]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        (1..=self.max_number)
            .contains(&value)
            .then_some((value, i + len))
    }

    /// `V` or `V-V2` (also with an en dash), leading whitespace allowed.
    fn verses(&self, i: usize) -> Option<(VerseSpan, usize)> {
        let (first, end) = self.number(self.skip_ws(i))?;
        let j = self.skip_ws(end);
        let dash_end = if self.byte(j) == Some(b'-') {
            Some(j + 1)
        } else if self.text[j..].starts_with(EN_DASH) {
            Some(j + EN_DASH.len_utf8())
        } else {
            None
        };
        let range_end = dash_end.and_then(|k| self.number(self.skip_ws(k)));
        Some(match range_end {
            Some((last, end)) => (VerseSpan { first, last }, end),
            None => (VerseSpan { first, last: first }, end),
        })
    }

    /// `C:V[-V2]`, leading whitespace allowed.
    fn chapter_verses(&self, i: usize) -> Option<(u32, VerseSpan, usize)> {
        let (chapter, end) = self.number(self.skip_ws(i))?;
        let colon = self.skip_ws(end);
        if self.byte(colon) != Some(b':') {
            return None;
        }
        let (verses, end) = self.verses(colon + 1)?;
        Some((chapter, verses, end))
    }

    /// `Book C:V[-V2]` anchored at `i`: an optional `1`–`3` numeral, then a
    /// run of book bytes starting with a capital. Returns the letters' run
    /// (from the capital), the chapter, the verses, and the end position.
    fn anchored_citation(&self, i: usize) -> Option<(Range<usize>, u32, VerseSpan, usize)> {
        let mut k = i;
        if self.byte(k).is_some_and(|b| matches!(b, b'1'..=b'3')) {
            k = self.skip_ws(k + 1);
        }
        if !self.byte(k).is_some_and(|b| b.is_ascii_uppercase()) {
            return None;
        }
        let run_end = k + self.bytes[k..].iter().take_while(|&&b| is_book_byte(b)).count();
        let (chapter, verses, end) = self.chapter_verses(run_end)?;
        Some((k..run_end, chapter, verses, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(text: &str) -> Vec<String> {
        extract_references(text)
    }

    #[test]
    fn test_mixed_continuations() {
        assert_eq!(
            refs("Matt. 1:16, 20; Luke 2:5; Deut. 20:7; 24:5"),
            vec![
                "Matthew 1:16",
                "Matthew 1:20",
                "Luke 2:5",
                "Deuteronomy 20:7",
                "Deuteronomy 24:5",
            ]
        );
    }

    #[test]
    fn test_range_expansion_inclusive() {
        assert_eq!(
            refs("Gen. 1:1-3"),
            vec!["Genesis 1:1", "Genesis 1:2", "Genesis 1:3"]
        );
        assert_eq!(
            refs("John 3:16, 18-19"),
            vec!["John 3:16", "John 3:18", "John 3:19"]
        );
        assert_eq!(
            refs("Ps. 23:1; 24:1 - 2"),
            vec!["Psalms 23:1", "Psalms 24:1", "Psalms 24:2"]
        );
        assert_eq!(refs("Gen. 2:4\u{2013}5"), vec!["Genesis 2:4", "Genesis 2:5"]);
    }

    #[test]
    fn test_reversed_range_keeps_first_verse() {
        assert_eq!(refs("Gen. 1:5-3"), vec!["Genesis 1:5"]);
    }

    #[test]
    fn test_canonical_passthrough() {
        assert_eq!(refs("John 3:16"), vec!["John 3:16"]);
        assert_eq!(refs("Song of Solomon 2:1"), vec!["Song of Solomon 2:1"]);
    }

    #[test]
    fn test_unknown_book_passthrough() {
        assert_eq!(refs("Xyz. 2:3"), vec!["Xyz 2:3"]);
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        assert_eq!(refs("Rom. 1:1; Rom. 1:1"), vec!["Romans 1:1"]);
        assert_eq!(
            refs("Rom. 1:1, 2. Later, see Rom. 1:2; 1:1"),
            vec!["Romans 1:1", "Romans 1:2"]
        );
    }

    #[test]
    fn test_no_citation_syntax() {
        assert!(refs("").is_empty());
        assert!(refs("In the beginning was the Word").is_empty());
        assert!(refs("Matt. 1, 2; Luke 3").is_empty());
        assert!(refs("ratio 3:4").is_empty());
    }

    #[test]
    fn test_seek_skips_surrounding_prose() {
        assert_eq!(
            refs("See Matt. 5:3 and compare Luke 6:20."),
            vec!["Matthew 5:3", "Luke 6:20"]
        );
        assert_eq!(refs("Note: as in Jn. 1:1"), vec!["John 1:1"]);
        assert_eq!(refs("\u{ab}Jn. 1:1\u{bb} \u{2014} prologue"), vec!["John 1:1"]);
    }

    #[test]
    fn test_numbered_books() {
        assert_eq!(
            refs("1 Cor. 13:4; 2 Cor. 5:17"),
            vec!["1 Corinthians 13:4", "2 Corinthians 5:17"]
        );
        assert_eq!(refs("as written in 1 John 4:8"), vec!["1 John 4:8"]);
        assert_eq!(refs("1Cor. 1:2"), vec!["1 Corinthians 1:2"]);
    }

    #[test]
    fn test_chapter_continuation_before_book() {
        // "2:3" after ';' is a chapter of the current book.
        assert_eq!(
            refs("1 Kings 1:1; 2:3"),
            vec!["1 Kings 1:1", "1 Kings 2:3"]
        );
    }

    #[test]
    fn test_comma_after_chapter_continuation_uses_new_chapter() {
        assert_eq!(
            refs("Deut. 20:7; 24:5, 6"),
            vec!["Deuteronomy 20:7", "Deuteronomy 24:5", "Deuteronomy 24:6"]
        );
    }

    #[test]
    fn test_comma_reads_only_verses() {
        // A comma never introduces a chapter or a book; "3" is a verse and the
        // trailing ":4" has no book of its own.
        assert_eq!(refs("Gen. 1:1, 3:4"), vec!["Genesis 1:1", "Genesis 1:3"]);
    }

    #[test]
    fn test_comma_before_numbered_book() {
        assert_eq!(
            refs("Gen. 1:1, 2 Sam. 3:4"),
            vec!["Genesis 1:1", "Genesis 1:2", "Sam 3:4"]
        );
    }

    #[test]
    fn test_semicolon_book_matches_seek_choice() {
        assert_eq!(refs("Compare Luke 2:5"), vec!["Luke 2:5"]);
        assert_eq!(
            refs("Gen. 1:1; Compare Luke 2:5"),
            vec!["Genesis 1:1", "Luke 2:5"]
        );
        assert_eq!(
            refs("Gen. 1:1; Song of Solomon 2:2; 2 Sam. 3:4; Xyz. 4:5"),
            vec!["Genesis 1:1", "Song of Solomon 2:2", "2 Samuel 3:4", "Xyz 4:5"]
        );
    }

    #[test]
    fn test_single_letter_is_not_a_book() {
        assert!(refs("A 1:1").is_empty());
        assert!(refs("see note B 2:3").is_empty());
        assert_eq!(refs("A Jn. 1:1"), vec!["John 1:1"]);
    }

    #[test]
    fn test_broken_comma_reseeks_by_default() {
        assert_eq!(
            refs("Matt. 1:16, and later Luke 2:5"),
            vec!["Matthew 1:16", "Luke 2:5"]
        );
    }

    #[test]
    fn test_broken_comma_stop_policy() {
        let options = ScanOptions {
            on_broken_comma: BrokenContinuation::Stop,
            ..ScanOptions::default()
        };
        let scanner = Scanner::with_options(BookAliases::standard(), options);
        assert_eq!(
            scanner.extract("Matt. 1:16, and later Luke 2:5"),
            vec!["Matthew 1:16"]
        );
        // A chain that ends some other way still reseeks.
        assert_eq!(
            scanner.extract("Matt. 1:16 and later Luke 2:5"),
            vec!["Matthew 1:16", "Luke 2:5"]
        );
    }

    #[test]
    fn test_broken_semicolon_reseeks() {
        assert_eq!(
            refs("Gen. 1:1; compare Ex. 3:14"),
            vec!["Genesis 1:1", "Exodus 3:14"]
        );
    }

    #[test]
    fn test_loose_spacing_and_line_breaks() {
        assert_eq!(refs("Matt.1:16"), vec!["Matthew 1:16"]);
        assert_eq!(refs("Matt. 1 : 16"), vec!["Matthew 1:16"]);
        assert_eq!(refs("Gen. 1:1;\n2:3"), vec!["Genesis 1:1", "Genesis 2:3"]);
    }

    #[test]
    fn test_number_bounds() {
        assert!(refs("Gen. 0:1").is_empty());
        assert!(refs("Gen. 1:0").is_empty());
        assert!(refs("Gen. 1:1000").is_empty());
        assert!(refs("Gen. 1:99999999999999999999").is_empty());

        let options = ScanOptions {
            max_number: 2000,
            ..ScanOptions::default()
        };
        let scanner = Scanner::with_options(BookAliases::standard(), options);
        assert_eq!(scanner.extract("Gen. 1:1000"), vec!["Genesis 1:1000"]);
    }

    #[test]
    fn test_max_number_clamped_to_ceiling() {
        let options = ScanOptions {
            max_number: u32::MAX,
            ..ScanOptions::default()
        };
        let scanner = Scanner::with_options(BookAliases::standard(), options);
        assert_eq!(
            scanner.extract("Gen. 1:10000"),
            vec![format!("Genesis 1:{}", MAX_NUMBER_CEILING)]
        );
        assert!(scanner.extract("Gen. 1:10001").is_empty());
        assert_eq!(scanner.extract("Gen. 1:1-999999999"), vec!["Genesis 1:1"]);
    }

    #[test]
    fn test_long_prose_scans_in_linear_time() {
        let mut text = "Word ".repeat(20_000);
        text.push_str("Acts 1:8");
        let mut many = String::new();
        for _ in 0..5_000 {
            many.push_str("Some Prose Here 0:1 and then ");
        }
        many.push_str("Jn. 1:1");

        let started = std::time::Instant::now();
        assert_eq!(refs(&text), vec!["Acts 1:8"]);
        assert_eq!(refs(&many), vec!["John 1:1"]);
        assert!(
            started.elapsed() < std::time::Duration::from_secs(2),
            "scan took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_injected_alias_table() {
        let empty = BookAliases::new();
        assert_eq!(Scanner::new(&empty).extract("Matt. 1:16"), vec!["Matt 1:16"]);

        let custom = BookAliases::from_pairs([("Mt", "Matthew")]);
        assert_eq!(
            Scanner::new(&custom).extract("Mt 5:9; Mt. 5:10"),
            vec!["Matthew 5:9", "Matthew 5:10"]
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let first = refs("Matt. 1:16, 20; Luke 2:5; 1 Cor. 1:2; Song 2:1-2; Xyz. 4:5");
        let second = refs(&first.join("; "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_deterministic() {
        let text = "Ex. 20:1-17; Deut. 5:6-21, 32; Matt. 22:37";
        assert_eq!(refs(text), refs(text));
    }

    #[test]
    fn test_concurrent_scans() {
        let inputs = ["John 3:16", "Gen. 1:1-3", "Rom. 8:28; 12:1"];
        std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|text| s.spawn(move || refs(text)))
                .collect();
            let results: Vec<Vec<String>> =
                handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results[0], vec!["John 3:16"]);
            assert_eq!(results[1].len(), 3);
            assert_eq!(results[2], vec!["Romans 8:28", "Romans 12:1"]);
        });
    }

    #[test]
    fn test_scan_returns_citations() {
        let found = Scanner::new(BookAliases::standard()).scan("Heb. 11:1");
        let citation = &found.citations()[0];
        assert_eq!(citation.book, "Hebrews");
        assert_eq!(citation.chapter, 11);
        assert_eq!(citation.verse, 1);
    }
}
