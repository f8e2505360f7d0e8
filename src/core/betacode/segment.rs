//! Line and word segmentation, and reassembly of converted words

use super::EmptyWordPolicy;

/// Split source text into lines on `\n`
///
/// Trailing newlines close the last line rather than opening new empty
/// ones. Empty input is one empty line.
pub fn split_lines(source: &str) -> std::str::Split<'_, char> {
    source.trim_end_matches('\n').split('\n')
}

/// Split a line into words on single spaces, keeping empty words
pub fn split_words(line: &str) -> std::str::Split<'_, char> {
    line.split(' ')
}

/// Convert every word of `source` and rejoin the result
///
/// Words of a line are joined by one space and every line, including the
/// last, is terminated by a newline.
pub fn reassemble<F>(source: &str, policy: EmptyWordPolicy, mut convert_word: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(source.len() * 2);

    for line in split_lines(source) {
        let mut first = true;
        for word in split_words(line) {
            if word.is_empty() && policy == EmptyWordPolicy::Collapse {
                continue;
            }
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(&convert_word(word));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(source: &str, policy: EmptyWordPolicy) -> String {
        reassemble(source, policy, |w| w.to_uppercase())
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb").collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(split_lines("a\nb\n").collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(split_lines("a\n\n").collect::<Vec<_>>(), ["a"]);
        assert_eq!(split_lines("a\n\nb\n\n\n").collect::<Vec<_>>(), ["a", "", "b"]);
        assert_eq!(split_lines("\n\n").collect::<Vec<_>>(), [""]);
        assert_eq!(split_lines("").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_split_words_keeps_empty() {
        assert_eq!(split_words("a  b").collect::<Vec<_>>(), ["a", "", "b"]);
        assert_eq!(split_words(" a").collect::<Vec<_>>(), ["", "a"]);
    }

    #[test]
    fn test_reassemble_preserve() {
        assert_eq!(upper("ab cd\nef", EmptyWordPolicy::Preserve), "AB CD\nEF\n");
        assert_eq!(upper("a  b", EmptyWordPolicy::Preserve), "A  B\n");
        assert_eq!(upper("", EmptyWordPolicy::Preserve), "\n");
    }

    #[test]
    fn test_reassemble_collapse() {
        assert_eq!(upper("a  b ", EmptyWordPolicy::Collapse), "A B\n");
        assert_eq!(upper("   ", EmptyWordPolicy::Collapse), "\n");
    }

    #[test]
    fn test_every_word_converted_once() {
        let mut seen = Vec::new();
        let out = reassemble("x y\nz", EmptyWordPolicy::Preserve, |w| {
            seen.push(w.to_string());
            w.to_string()
        });
        assert_eq!(out, "x y\nz\n");
        assert_eq!(seen, ["x", "y", "z"]);
    }
}
