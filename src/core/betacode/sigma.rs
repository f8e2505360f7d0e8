//! Final sigma selection
//!
//! Only the last letter position of a word is considered, optionally
//! followed by one of `, . : ;` or a newline. Quotes and brackets after the
//! sigma are not looked through.

use crate::data::betacode::{FINAL_SIGMA, MEDIAL_SIGMA, SIGMA_TERMINATORS};

/// Replace a word-final medial sigma with the final form
///
/// Spaces are stripped from the word when a replacement is made; otherwise
/// the word is returned untouched.
pub fn normalize_final_sigma(word: String) -> String {
    if !word.contains(MEDIAL_SIGMA) {
        return word;
    }

    let mut chars: Vec<char> = word.chars().filter(|&c| c != ' ').collect();
    let target = match chars.as_slice() {
        [.., last] if *last == MEDIAL_SIGMA => chars.len() - 1,
        [.., sigma, last] if *sigma == MEDIAL_SIGMA && SIGMA_TERMINATORS.contains(last) => {
            chars.len() - 2
        }
        _ => return word,
    };

    chars[target] = FINAL_SIGMA;
    chars.into_iter().collect()
}
