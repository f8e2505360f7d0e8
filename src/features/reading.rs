//! Reading position tracking
//!
//! A work is a sequence of books, each a sequence of lines; one line is
//! one page. A `ReadingSession` moves through the work and persists the
//! position after every move, keyed by the work's id, so reading resumes
//! where it stopped.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::betacode::BetaCodeConverter;
use crate::utils::error::{ConversionError, ConversionResult};
use crate::utils::files::ResourceResolver;

// =============================================================================
// Reading material
// =============================================================================

/// One book of a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub lines: Vec<String>,
}

impl Book {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// A work made of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    pub author: String,
    pub title: String,
    pub books: Vec<Book>,
}

impl Work {
    /// Parse and validate a work from JSON
    pub fn from_json(source: &str) -> ConversionResult<Self> {
        let work: Work = serde_json::from_str(source)?;
        work.validate()?;
        Ok(work)
    }

    /// Load a JSON work through a resolver
    pub fn load<R: ResourceResolver + ?Sized>(resolver: &R, name: &str) -> ConversionResult<Self> {
        let source = resolver.read_resource(name)?;
        let work = Self::from_json(&source)?;
        tracing::debug!(resource = name, work = %work.id, books = work.book_count(), "work loaded");
        Ok(work)
    }

    /// A work needs an id and at least one line in every book
    pub fn validate(&self) -> ConversionResult<()> {
        if self.id.is_empty() {
            return Err(ConversionError::invalid_work(&self.title, "missing id"));
        }
        if self.books.is_empty() {
            return Err(ConversionError::invalid_work(&self.id, "no books"));
        }
        if let Some(index) = self.books.iter().position(|b| b.lines.is_empty()) {
            return Err(ConversionError::invalid_work(
                &self.id,
                format!("book {} has no lines", index + 1),
            ));
        }
        Ok(())
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn book(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    fn contains(&self, position: ReadingPosition) -> bool {
        self.book(position.book)
            .is_some_and(|book| position.line < book.line_count())
    }
}

// =============================================================================
// Position
// =============================================================================

/// Zero-based book and line indices, persisted as `"book,line"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ReadingPosition {
    pub book: usize,
    pub line: usize,
}

impl ReadingPosition {
    pub const START: ReadingPosition = ReadingPosition { book: 0, line: 0 };

    pub fn new(book: usize, line: usize) -> Self {
        Self { book, line }
    }
}

impl fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.book, self.line)
    }
}

impl FromStr for ReadingPosition {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let corrupt = || ConversionError::persistence(format!("corrupt reading position '{}'", s));
        let (book, line) = s.split_once(',').ok_or_else(corrupt)?;
        Ok(Self {
            book: book.trim().parse().map_err(|_| corrupt())?,
            line: line.trim().parse().map_err(|_| corrupt())?,
        })
    }
}

// =============================================================================
// Position stores
// =============================================================================

/// Persistence for reading positions keyed by work id
pub trait PositionStore {
    /// The stored position, `None` if the work was never opened
    fn load(&self, work_id: &str) -> ConversionResult<Option<ReadingPosition>>;

    fn save(&mut self, work_id: &str, position: ReadingPosition) -> ConversionResult<()>;
}

/// In-memory store (tests, embedding)
#[derive(Debug, Clone, Default)]
pub struct MemoryPositionStore {
    positions: HashMap<String, String>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw persisted value as-is
    pub fn insert_raw(&mut self, work_id: &str, raw: &str) {
        self.positions.insert(work_id.to_string(), raw.to_string());
    }

    pub fn raw(&self, work_id: &str) -> Option<&str> {
        self.positions.get(work_id).map(String::as_str)
    }
}

impl PositionStore for MemoryPositionStore {
    fn load(&self, work_id: &str) -> ConversionResult<Option<ReadingPosition>> {
        self.positions.get(work_id).map(|raw| raw.parse()).transpose()
    }

    fn save(&mut self, work_id: &str, position: ReadingPosition) -> ConversionResult<()> {
        self.positions
            .insert(work_id.to_string(), position.to_string());
        Ok(())
    }
}

/// Store backed by one JSON file of `work_id -> "book,line"`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct JsonPositionStore {
    path: PathBuf,
    positions: IndexMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonPositionStore {
    /// Open the store; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> ConversionResult<Self> {
        let path = path.as_ref().to_path_buf();
        let positions = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, positions })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PositionStore for JsonPositionStore {
    fn load(&self, work_id: &str) -> ConversionResult<Option<ReadingPosition>> {
        self.positions.get(work_id).map(|raw| raw.parse()).transpose()
    }

    fn save(&mut self, work_id: &str, position: ReadingPosition) -> ConversionResult<()> {
        self.positions
            .insert(work_id.to_string(), position.to_string());
        let content = serde_json::to_string_pretty(&self.positions)?;
        std::fs::write(&self.path, content).map_err(|e| {
            ConversionError::persistence(format!("{}: {}", self.path.display(), e))
        })
    }
}

// =============================================================================
// Session
// =============================================================================

/// An open work with a current position
pub struct ReadingSession<S: PositionStore> {
    work: Work,
    store: S,
    position: ReadingPosition,
}

impl<S: PositionStore> ReadingSession<S> {
    /// Open a work at its last stored position
    ///
    /// Corrupt or out-of-range stored positions restart the work from the
    /// first line. The restored position is written back immediately.
    pub fn open(work: Work, mut store: S) -> ConversionResult<Self> {
        work.validate()?;

        let position = match store.load(&work.id) {
            Ok(Some(position)) if work.contains(position) => position,
            Ok(Some(position)) => {
                tracing::warn!(work = %work.id, %position, "stored position out of range, starting over");
                ReadingPosition::START
            }
            Ok(None) => ReadingPosition::START,
            Err(e) => {
                tracing::warn!(work = %work.id, error = %e, "unreadable stored position, starting over");
                ReadingPosition::START
            }
        };

        store.save(&work.id, position)?;
        Ok(Self {
            work,
            store,
            position,
        })
    }

    /// Text of the current line
    pub fn current_page(&self) -> &str {
        &self.work.books[self.position.book].lines[self.position.line]
    }

    /// Current line rendered in Greek
    pub fn converted_page(&self, converter: &BetaCodeConverter) -> String {
        converter.convert(self.current_page())
    }

    /// Move forward (positive) or backward (negative) by `delta` lines
    ///
    /// Crossing the end of a book continues into the next one and crossing
    /// its start continues at the end of the previous one. Movement stops
    /// at the first line of the work and at the last line of the work.
    pub fn advance(&mut self, delta: i64) -> ConversionResult<()> {
        self.position = self.step(delta);
        self.store.save(&self.work.id, self.position)
    }

    fn step(&self, delta: i64) -> ReadingPosition {
        let books = &self.work.books;
        let mut book = self.position.book;
        let mut target = (self.position.line as i64).saturating_add(delta);

        loop {
            let len = books[book].line_count() as i64;
            if target >= len {
                if book + 1 == books.len() {
                    return ReadingPosition::new(book, books[book].line_count() - 1);
                }
                target -= len;
                book += 1;
            } else if target < 0 {
                if book == 0 {
                    return ReadingPosition::START;
                }
                book -= 1;
                target += books[book].line_count() as i64;
            } else {
                return ReadingPosition::new(book, target as usize);
            }
        }
    }

    pub fn position(&self) -> ReadingPosition {
        self.position
    }

    pub fn book_index(&self) -> usize {
        self.position.book
    }

    pub fn line_index(&self) -> usize {
        self.position.line
    }

    /// `"Author, Title book.line"` with one-based numbers
    pub fn reading_info(&self) -> String {
        format!(
            "{}, {} {}.{}",
            self.work.author,
            self.work.title,
            self.position.book + 1,
            self.position.line + 1
        )
    }

    pub fn work(&self) -> &Work {
        &self.work
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work() -> Work {
        Work {
            id: "hom-il".to_string(),
            author: "Homer".to_string(),
            title: "Iliad".to_string(),
            books: vec![
                Book::new(["a1", "a2", "a3"]),
                Book::new(["b1", "b2"]),
                Book::new(["c1", "c2", "c3", "c4"]),
            ],
        }
    }

    fn session() -> ReadingSession<MemoryPositionStore> {
        ReadingSession::open(work(), MemoryPositionStore::new()).unwrap()
    }

    #[test]
    fn test_position_round_trip_format() {
        let position: ReadingPosition = "2,17".parse().unwrap();
        assert_eq!(position, ReadingPosition::new(2, 17));
        assert_eq!(position.to_string(), "2,17");
        assert!("2;17".parse::<ReadingPosition>().is_err());
        assert!("a,1".parse::<ReadingPosition>().is_err());
    }

    #[test]
    fn test_opens_at_start() {
        let session = session();
        assert_eq!(session.position(), ReadingPosition::START);
        assert_eq!(session.current_page(), "a1");
        assert_eq!(session.store().raw("hom-il"), Some("0,0"));
    }

    #[test]
    fn test_advance_within_book() {
        let mut session = session();
        session.advance(2).unwrap();
        assert_eq!(session.current_page(), "a3");
        session.advance(-1).unwrap();
        assert_eq!(session.current_page(), "a2");
    }

    #[test]
    fn test_advance_into_next_book() {
        let mut session = session();
        session.advance(3).unwrap();
        assert_eq!(session.position(), ReadingPosition::new(1, 0));
        session.advance(3).unwrap();
        assert_eq!(session.position(), ReadingPosition::new(2, 1));
    }

    #[test]
    fn test_advance_back_into_previous_book() {
        let mut session = session();
        session.advance(5).unwrap();
        assert_eq!(session.current_page(), "c1");
        session.advance(-1).unwrap();
        assert_eq!(session.current_page(), "b2");
        session.advance(-4).unwrap();
        assert_eq!(session.current_page(), "a1");
    }

    #[test]
    fn test_advance_clamps_at_end_of_work() {
        let mut session = session();
        session.advance(100).unwrap();
        assert_eq!(session.position(), ReadingPosition::new(2, 3));
        assert_eq!(session.current_page(), "c4");
    }

    #[test]
    fn test_advance_clamps_at_start_of_work() {
        let mut session = session();
        session.advance(4).unwrap();
        session.advance(-100).unwrap();
        assert_eq!(session.position(), ReadingPosition::START);
    }

    #[test]
    fn test_extreme_delta() {
        let mut session = session();
        session.advance(i64::MAX).unwrap();
        assert_eq!(session.current_page(), "c4");
        session.advance(i64::MIN).unwrap();
        assert_eq!(session.current_page(), "a1");
    }

    #[test]
    fn test_position_persisted_and_restored() {
        let mut session = session();
        session.advance(4).unwrap();
        let store = session.into_store();
        assert_eq!(store.raw("hom-il"), Some("1,1"));

        let reopened = ReadingSession::open(work(), store).unwrap();
        assert_eq!(reopened.current_page(), "b2");
    }

    #[test]
    fn test_corrupt_position_restarts() {
        let mut store = MemoryPositionStore::new();
        store.insert_raw("hom-il", "garbage");
        let session = ReadingSession::open(work(), store).unwrap();
        assert_eq!(session.position(), ReadingPosition::START);
        assert_eq!(session.store().raw("hom-il"), Some("0,0"));
    }

    #[test]
    fn test_out_of_range_position_restarts() {
        let mut store = MemoryPositionStore::new();
        store.insert_raw("hom-il", "1,5");
        let session = ReadingSession::open(work(), store).unwrap();
        assert_eq!(session.position(), ReadingPosition::START);
    }

    #[test]
    fn test_reading_info() {
        let mut session = session();
        session.advance(4).unwrap();
        assert_eq!(session.reading_info(), "Homer, Iliad 2.2");
    }

    #[test]
    fn test_converted_page() {
        let work = Work {
            books: vec![Book::new(["mh=nin a)/eide qea\\"])],
            ..work()
        };
        let session = ReadingSession::open(work, MemoryPositionStore::new()).unwrap();
        let converter = BetaCodeConverter::standard();
        assert_eq!(session.converted_page(&converter), "μῆνιν ἄειδε θεὰ\n");
    }

    #[test]
    fn test_invalid_work() {
        let mut empty_book = work();
        empty_book.books.push(Book::new(Vec::<String>::new()));
        let err = ReadingSession::open(empty_book, MemoryPositionStore::new()).err();
        assert!(matches!(err, Some(ConversionError::InvalidWork { .. })));

        let no_books = Work {
            books: vec![],
            ..work()
        };
        assert!(no_books.validate().is_err());
    }

    #[test]
    fn test_work_from_json() {
        let json = r#"{
            "id": "plat-ap",
            "author": "Plato",
            "title": "Apology",
            "books": [{"lines": ["o(/ti me\\n u(mei=s"]}]
        }"#;
        let work = Work::from_json(json).unwrap();
        assert_eq!(work.book_count(), 1);
        assert!(Work::from_json(r#"{"id": "x", "author": "", "title": "", "books": []}"#).is_err());
    }

    #[test]
    fn test_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");

        let store = JsonPositionStore::open(&path).unwrap();
        let mut session = ReadingSession::open(work(), store).unwrap();
        session.advance(6).unwrap();

        let store = JsonPositionStore::open(&path).unwrap();
        assert_eq!(store.load("hom-il").unwrap(), Some(ReadingPosition::new(2, 1)));
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_json_store_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonPositionStore::open(&path).is_err());
    }
}
