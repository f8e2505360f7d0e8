//! Per-word scanning state machine
//!
//! Beta code writes diacriticals *after* the letter they modify but the
//! capital marker *before* its letter. The scanner therefore never commits
//! the most recent unit straight away: it is held as a settled group until
//! the next character shows whether a diacritical regroups it. A capital
//! group stays open from the marker through its diacriticals up to and
//! including the base letter.

use super::resolve::resolve_group;
use crate::data::betacode::{is_diacritical, CAPITAL_MARKER};
use crate::data::table::MappingTable;

/// The group currently being accumulated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Group {
    /// Start of the word; nothing seen yet
    #[default]
    Idle,
    /// A finished unit, still open to a trailing diacritical
    Settled { source: char, rendered: String },
    /// Base character plus trailing diacriticals
    Vowel(String),
    /// Capital marker plus diacriticals, closed by a base letter
    Capital(String),
}

/// Converts one word, one character at a time
pub struct WordScanner<'t> {
    table: &'t MappingTable,
    output: String,
    group: Group,
}

impl<'t> WordScanner<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self {
            table,
            output: String::new(),
            group: Group::Idle,
        }
    }

    /// Scan a complete word
    pub fn scan(table: &'t MappingTable, word: &str) -> String {
        let mut scanner = Self::new(table);
        for c in word.chars() {
            scanner.feed(c);
        }
        scanner.finish()
    }

    /// Feed the next character of the word
    ///
    /// The marker is classified before the direct-key test, so a table entry
    /// for it only renders a marker left dangling at the end of a word. A
    /// diacritical with its own entry is a letter like any other.
    pub fn feed(&mut self, c: char) {
        if c == CAPITAL_MARKER {
            self.push_marker();
        } else if let Some(unit) = self.table.lookup_char(c) {
            let unit = unit.to_string();
            self.push_letter(c, unit);
        } else if is_diacritical(c) {
            self.push_diacritical(c);
        } else {
            self.flush();
            self.group = Group::Settled {
                source: c,
                rendered: c.to_string(),
            };
        }
    }

    /// Resolve whatever is still pending and return the converted word
    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    fn push_letter(&mut self, c: char, unit: String) {
        let rendered = match &mut self.group {
            Group::Capital(buf) => {
                buf.push(c);
                let mut rendered = String::new();
                resolve_group(self.table, buf, &mut rendered);
                rendered
            }
            _ => {
                self.flush();
                unit
            }
        };
        self.group = Group::Settled {
            source: c,
            rendered,
        };
    }

    fn push_marker(&mut self) {
        match &mut self.group {
            Group::Capital(buf) => buf.push(CAPITAL_MARKER),
            _ => {
                self.flush();
                self.group = Group::Capital(CAPITAL_MARKER.to_string());
            }
        }
    }

    fn push_diacritical(&mut self, mark: char) {
        match &mut self.group {
            Group::Capital(buf) | Group::Vowel(buf) => buf.push(mark),
            Group::Settled { source, .. } => {
                // the held unit is dropped and its source regrouped with the mark
                let mut buf = String::with_capacity(2);
                buf.push(*source);
                buf.push(mark);
                self.group = Group::Vowel(buf);
            }
            Group::Idle => {
                self.group = Group::Settled {
                    source: mark,
                    rendered: mark.to_string(),
                };
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::take(&mut self.group) {
            Group::Idle => {}
            Group::Settled { rendered, .. } => self.output.push_str(&rendered),
            Group::Vowel(buf) | Group::Capital(buf) => {
                resolve_group(self.table, &buf, &mut self.output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MappingTable {
        MappingTable::from_pairs([
            ("a", "α"),
            ("b", "β"),
            ("s", "σ"),
            ("a/", "ά"),
            ("a)/", "ἄ"),
            ("*", ""),
            ("*a", "Α"),
            ("*)a", "Ἀ"),
        ])
        .unwrap()
    }

    fn scan(word: &str) -> String {
        WordScanner::scan(&table(), word)
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(scan(""), "");
    }

    #[test]
    fn test_direct_letters() {
        assert_eq!(scan("bab"), "βαβ");
    }

    #[test]
    fn test_trailing_diacritical_regroups() {
        assert_eq!(scan("a/"), "ά");
        assert_eq!(scan("ba/b"), "βάβ");
    }

    #[test]
    fn test_stacked_diacriticals() {
        assert_eq!(scan("a)/"), "ἄ");
    }

    #[test]
    fn test_unmapped_composite_passes_through() {
        assert_eq!(scan("a="), "a=");
        assert_eq!(scan("b/a"), "b/α");
    }

    #[test]
    fn test_capital_group() {
        assert_eq!(scan("*a"), "Α");
        assert_eq!(scan("*)ab"), "Ἀβ");
    }

    #[test]
    fn test_capital_without_mapping() {
        assert_eq!(scan("*b"), "*b");
        assert_eq!(scan("*(/a"), "*(/a");
    }

    #[test]
    fn test_dangling_marker_uses_its_entry() {
        assert_eq!(scan("a*"), "α");
    }

    #[test]
    fn test_diacritical_after_capital_regroups_letter() {
        assert_eq!(scan("*a/"), "ά");
    }

    #[test]
    fn test_leading_diacritical_is_verbatim() {
        assert_eq!(scan("/"), "/");
        assert_eq!(scan("/a"), "/α");
        assert_eq!(scan(")/"), ")/");
    }

    #[test]
    fn test_other_characters_verbatim() {
        assert_eq!(scan("a,b"), "α,β");
        assert_eq!(scan("a1"), "α1");
        assert_eq!(scan("a,/"), "α,/");
    }

    #[test]
    fn test_marker_closes_pending_vowel() {
        assert_eq!(scan("a/*a"), "άΑ");
    }

    #[test]
    fn test_mapped_diacritical_is_a_letter() {
        let table = MappingTable::from_pairs([("a", "α"), ("a/", "ά"), ("|", "ι")]).unwrap();
        assert_eq!(WordScanner::scan(&table, "a|"), "αι");
        assert_eq!(WordScanner::scan(&table, "|a"), "ια");
        assert_eq!(WordScanner::scan(&table, "a/|"), "άι");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(scan("λa"), "λα");
    }
}
