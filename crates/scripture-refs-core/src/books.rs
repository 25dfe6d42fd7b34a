//! Book-name normalization.
//!
//! Maps abbreviated or alternate spellings of a book name (`"Matt."`,
//! `"1 Chron."`, `"Ps."`) to one canonical name (`"Matthew"`,
//! `"1 Chronicles"`, `"Psalms"`).
//!
//! The table is an ordinary value ([`BookAliases`]) so callers and tests can
//! inject their own. [`BookAliases::standard`] is the built-in table,
//! initialized on first use and never mutated afterwards.
//!
//! Normalization never fails: names the table does not know are passed
//! through (minus a trailing period) rather than rejected.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Canonical names, in canonical order.
pub const CANONICAL_BOOKS: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Abbreviations used by Easton-style dictionary prose.
const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("Gen.", "Genesis"),
    ("Ex.", "Exodus"),
    ("Lev.", "Leviticus"),
    ("Num.", "Numbers"),
    ("Deut.", "Deuteronomy"),
    ("Josh.", "Joshua"),
    ("Judg.", "Judges"),
    ("1 Sam.", "1 Samuel"),
    ("2 Sam.", "2 Samuel"),
    ("1 Chron.", "1 Chronicles"),
    ("2 Chron.", "2 Chronicles"),
    ("Neh.", "Nehemiah"),
    ("Esth.", "Esther"),
    ("Ps.", "Psalms"),
    ("Prov.", "Proverbs"),
    ("Eccles.", "Ecclesiastes"),
    ("Song", "Song of Solomon"),
    ("Isa.", "Isaiah"),
    ("Jer.", "Jeremiah"),
    ("Lam.", "Lamentations"),
    ("Ezek.", "Ezekiel"),
    ("Dan.", "Daniel"),
    ("Hos.", "Hosea"),
    ("Obad.", "Obadiah"),
    ("Jon.", "Jonah"),
    ("Mic.", "Micah"),
    ("Nah.", "Nahum"),
    ("Hab.", "Habakkuk"),
    ("Zeph.", "Zephaniah"),
    ("Hag.", "Haggai"),
    ("Zech.", "Zechariah"),
    ("Mal.", "Malachi"),
    ("Matt.", "Matthew"),
    ("Matt", "Matthew"),
    ("Luk.", "Luke"),
    ("Jn.", "John"),
    ("Rom.", "Romans"),
    ("1 Cor.", "1 Corinthians"),
    ("2 Cor.", "2 Corinthians"),
    ("Gal.", "Galatians"),
    ("Eph.", "Ephesians"),
    ("Phil.", "Philippians"),
    ("Col.", "Colossians"),
    ("1 Thess.", "1 Thessalonians"),
    ("2 Thess.", "2 Thessalonians"),
    ("1 Tim.", "1 Timothy"),
    ("2 Tim.", "2 Timothy"),
    ("Tit.", "Titus"),
    ("Philem.", "Philemon"),
    ("Heb.", "Hebrews"),
    ("Jas.", "James"),
    ("1 Pet.", "1 Peter"),
    ("2 Pet.", "2 Peter"),
    ("Rev.", "Revelation"),
];

static STANDARD: OnceLock<BookAliases> = OnceLock::new();

/// Alias → canonical-name lookup table.
///
/// Every canonical name is also a key mapping to itself, so already
/// canonical text resolves without special casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookAliases {
    map: BTreeMap<String, String>,
}

impl BookAliases {
    /// An empty table. Every name passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: all canonical names plus the common abbreviations.
    pub fn standard() -> &'static BookAliases {
        STANDARD.get_or_init(|| {
            let mut table = BookAliases::new();
            for book in CANONICAL_BOOKS {
                table.insert(*book, *book);
            }
            table.extend(STANDARD_ALIASES.iter().copied());
            table
        })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = BookAliases::new();
        table.extend(pairs);
        table
    }

    /// Register `alias` for `canonical`. Keys are stored whitespace-collapsed;
    /// the canonical name is registered as its own alias if it is new.
    pub fn insert(&mut self, alias: impl AsRef<str>, canonical: impl AsRef<str>) {
        let alias = collapse_whitespace(alias.as_ref());
        let canonical = collapse_whitespace(canonical.as_ref());
        if alias.is_empty() || canonical.is_empty() {
            return;
        }
        self.map
            .entry(canonical.clone())
            .or_insert_with(|| canonical.clone());
        self.map.insert(alias, canonical);
    }

    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (alias, canonical) in pairs {
            self.insert(alias, canonical);
        }
    }

    /// Exact lookup, no normalization.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.map.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(alias, canonical)` pairs sorted by alias.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical name for `raw` if the table recognizes it in any of the
    /// tolerated spellings.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let name = tidy(raw);
        if let Some(canonical) = self.get(&name) {
            return Some(canonical);
        }
        match name.strip_suffix('.') {
            Some(stripped) => self.get(stripped.trim_end()),
            None => self.get(&format!("{}.", name)),
        }
    }

    pub fn is_known(&self, raw: &str) -> bool {
        self.resolve(raw).is_some()
    }

    /// Canonical name for `raw`, or `raw` tidied and without its trailing
    /// period when the table does not know it.
    ///
    /// ```rust
    /// use scripture_refs_core::books::BookAliases;
    ///
    /// let books = BookAliases::standard();
    /// assert_eq!(books.normalize("Deut."), "Deuteronomy");
    /// assert_eq!(books.normalize("  1   Cor. "), "1 Corinthians");
    /// assert_eq!(books.normalize("Xyz."), "Xyz");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        if let Some(canonical) = self.resolve(raw) {
            return canonical.to_string();
        }
        let name = tidy(raw);
        match name.strip_suffix('.') {
            Some(stripped) => stripped.trim_end().to_string(),
            None => name,
        }
    }
}

/// Normalize `raw` against the built-in table.
pub fn normalize(raw: &str) -> String {
    BookAliases::standard().normalize(raw)
}

/// Collapse whitespace runs to single spaces and trim.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace and separate a leading numeral glued to the name
/// (`"1Cor."` → `"1 Cor."`).
fn tidy(raw: &str) -> String {
    let name = collapse_whitespace(raw);
    let bytes = name.as_bytes();
    if bytes.len() > 1 && matches!(bytes[0], b'1'..=b'3') && bytes[1].is_ascii_alphabetic() {
        format!("{} {}", &name[..1], &name[1..])
    } else {
        name
    }
}
