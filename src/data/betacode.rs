//! Beta code alphabet and the standard Latin-to-Greek mapping table
//!
//! Keys follow the TLG beta code conventions: breathing before accent,
//! iota subscript last, and the capital marker `*` preceding the
//! breathing, the accent and finally the letter. Punctuation is left
//! unmapped so that `, . : ;` survive into the final-sigma rule.

use phf::phf_map;

/// Marker that opens a capital group
pub const CAPITAL_MARKER: char = '*';

/// Breathings, accents, iota subscript and diaeresis, in beta code
pub const DIACRITICALS: [char; 7] = [')', '(', '\\', '/', '=', '|', '+'];

/// Sigma as it appears inside a word
pub const MEDIAL_SIGMA: char = 'σ';

/// Sigma as it appears at the end of a word
pub const FINAL_SIGMA: char = 'ς';

/// Characters after which a trailing medial sigma still ends the word
pub const SIGMA_TERMINATORS: [char; 5] = [',', '.', ':', ';', '\n'];

/// Whether `c` is one of the seven beta code diacriticals
#[inline]
pub fn is_diacritical(c: char) -> bool {
    DIACRITICALS.contains(&c)
}

/// Standard beta code token to Greek mapping
pub static STANDARD_MAPPINGS: phf::Map<&'static str, &'static str> = phf_map! {
    // Base letters
    "a" => "α",
    "b" => "β",
    "g" => "γ",
    "d" => "δ",
    "e" => "ε",
    "z" => "ζ",
    "h" => "η",
    "q" => "θ",
    "i" => "ι",
    "k" => "κ",
    "l" => "λ",
    "m" => "μ",
    "n" => "ν",
    "c" => "ξ",
    "o" => "ο",
    "p" => "π",
    "r" => "ρ",
    "s" => "σ",
    "t" => "τ",
    "u" => "υ",
    "f" => "φ",
    "x" => "χ",
    "y" => "ψ",
    "w" => "ω",
    "v" => "ϝ",

    // Lowercase letters with breathings, accents, iota subscript and diaeresis
    "a|" => "ᾳ",
    "a/" => "ά",
    "a/|" => "ᾴ",
    "a\\" => "ὰ",
    "a\\|" => "ᾲ",
    "a=" => "ᾶ",
    "a=|" => "ᾷ",
    "a)" => "ἀ",
    "a)|" => "ᾀ",
    "a)/" => "ἄ",
    "a)/|" => "ᾄ",
    "a)\\" => "ἂ",
    "a)\\|" => "ᾂ",
    "a)=" => "ἆ",
    "a)=|" => "ᾆ",
    "a(" => "ἁ",
    "a(|" => "ᾁ",
    "a(/" => "ἅ",
    "a(/|" => "ᾅ",
    "a(\\" => "ἃ",
    "a(\\|" => "ᾃ",
    "a(=" => "ἇ",
    "a(=|" => "ᾇ",
    "e/" => "έ",
    "e\\" => "ὲ",
    "e)" => "ἐ",
    "e)/" => "ἔ",
    "e)\\" => "ἒ",
    "e(" => "ἑ",
    "e(/" => "ἕ",
    "e(\\" => "ἓ",
    "h|" => "ῃ",
    "h/" => "ή",
    "h/|" => "ῄ",
    "h\\" => "ὴ",
    "h\\|" => "ῂ",
    "h=" => "ῆ",
    "h=|" => "ῇ",
    "h)" => "ἠ",
    "h)|" => "ᾐ",
    "h)/" => "ἤ",
    "h)/|" => "ᾔ",
    "h)\\" => "ἢ",
    "h)\\|" => "ᾒ",
    "h)=" => "ἦ",
    "h)=|" => "ᾖ",
    "h(" => "ἡ",
    "h(|" => "ᾑ",
    "h(/" => "ἥ",
    "h(/|" => "ᾕ",
    "h(\\" => "ἣ",
    "h(\\|" => "ᾓ",
    "h(=" => "ἧ",
    "h(=|" => "ᾗ",
    "i/" => "ί",
    "i\\" => "ὶ",
    "i=" => "ῖ",
    "i)" => "ἰ",
    "i)/" => "ἴ",
    "i)\\" => "ἲ",
    "i)=" => "ἶ",
    "i(" => "ἱ",
    "i(/" => "ἵ",
    "i(\\" => "ἳ",
    "i(=" => "ἷ",
    "o/" => "ό",
    "o\\" => "ὸ",
    "o)" => "ὀ",
    "o)/" => "ὄ",
    "o)\\" => "ὂ",
    "o(" => "ὁ",
    "o(/" => "ὅ",
    "o(\\" => "ὃ",
    "u/" => "ύ",
    "u\\" => "ὺ",
    "u=" => "ῦ",
    "u)" => "ὐ",
    "u)/" => "ὔ",
    "u)\\" => "ὒ",
    "u)=" => "ὖ",
    "u(" => "ὑ",
    "u(/" => "ὕ",
    "u(\\" => "ὓ",
    "u(=" => "ὗ",
    "w|" => "ῳ",
    "w/" => "ώ",
    "w/|" => "ῴ",
    "w\\" => "ὼ",
    "w\\|" => "ῲ",
    "w=" => "ῶ",
    "w=|" => "ῷ",
    "w)" => "ὠ",
    "w)|" => "ᾠ",
    "w)/" => "ὤ",
    "w)/|" => "ᾤ",
    "w)\\" => "ὢ",
    "w)\\|" => "ᾢ",
    "w)=" => "ὦ",
    "w)=|" => "ᾦ",
    "w(" => "ὡ",
    "w(|" => "ᾡ",
    "w(/" => "ὥ",
    "w(/|" => "ᾥ",
    "w(\\" => "ὣ",
    "w(\\|" => "ᾣ",
    "w(=" => "ὧ",
    "w(=|" => "ᾧ",
    "i+" => "ϊ",
    "i+/" => "ΐ",
    "i/+" => "ΐ",
    "i+\\" => "ῒ",
    "i\\+" => "ῒ",
    "i+=" => "ῗ",
    "i=+" => "ῗ",
    "u+" => "ϋ",
    "u+/" => "ΰ",
    "u/+" => "ΰ",
    "u+\\" => "ῢ",
    "u\\+" => "ῢ",
    "u+=" => "ῧ",
    "u=+" => "ῧ",
    "r)" => "ῤ",
    "r(" => "ῥ",

    // Capitals: marker, then breathing and accent, then the letter
    "*a" => "Α",
    "*b" => "Β",
    "*g" => "Γ",
    "*d" => "Δ",
    "*e" => "Ε",
    "*z" => "Ζ",
    "*h" => "Η",
    "*q" => "Θ",
    "*i" => "Ι",
    "*k" => "Κ",
    "*l" => "Λ",
    "*m" => "Μ",
    "*n" => "Ν",
    "*c" => "Ξ",
    "*o" => "Ο",
    "*p" => "Π",
    "*r" => "Ρ",
    "*s" => "Σ",
    "*t" => "Τ",
    "*u" => "Υ",
    "*f" => "Φ",
    "*x" => "Χ",
    "*y" => "Ψ",
    "*w" => "Ω",
    "*v" => "Ϝ",
    "*/a" => "Ά",
    "*\\a" => "Ὰ",
    "*)a" => "Ἀ",
    "*)/a" => "Ἄ",
    "*)\\a" => "Ἂ",
    "*)=a" => "Ἆ",
    "*(a" => "Ἁ",
    "*(/a" => "Ἅ",
    "*(\\a" => "Ἃ",
    "*(=a" => "Ἇ",
    "*/e" => "Έ",
    "*\\e" => "Ὲ",
    "*)e" => "Ἐ",
    "*)/e" => "Ἔ",
    "*)\\e" => "Ἒ",
    "*(e" => "Ἑ",
    "*(/e" => "Ἕ",
    "*(\\e" => "Ἓ",
    "*/h" => "Ή",
    "*\\h" => "Ὴ",
    "*)h" => "Ἠ",
    "*)/h" => "Ἤ",
    "*)\\h" => "Ἢ",
    "*)=h" => "Ἦ",
    "*(h" => "Ἡ",
    "*(/h" => "Ἥ",
    "*(\\h" => "Ἣ",
    "*(=h" => "Ἧ",
    "*/i" => "Ί",
    "*\\i" => "Ὶ",
    "*)i" => "Ἰ",
    "*)/i" => "Ἴ",
    "*)\\i" => "Ἲ",
    "*)=i" => "Ἶ",
    "*(i" => "Ἱ",
    "*(/i" => "Ἵ",
    "*(\\i" => "Ἳ",
    "*(=i" => "Ἷ",
    "*/o" => "Ό",
    "*\\o" => "Ὸ",
    "*)o" => "Ὀ",
    "*)/o" => "Ὄ",
    "*)\\o" => "Ὂ",
    "*(o" => "Ὁ",
    "*(/o" => "Ὅ",
    "*(\\o" => "Ὃ",
    "*/u" => "Ύ",
    "*\\u" => "Ὺ",
    "*(u" => "Ὑ",
    "*(/u" => "Ὕ",
    "*(\\u" => "Ὓ",
    "*(=u" => "Ὗ",
    "*/w" => "Ώ",
    "*\\w" => "Ὼ",
    "*)w" => "Ὠ",
    "*)/w" => "Ὤ",
    "*)\\w" => "Ὢ",
    "*)=w" => "Ὦ",
    "*(w" => "Ὡ",
    "*(/w" => "Ὥ",
    "*(\\w" => "Ὣ",
    "*(=w" => "Ὧ",
    "*(r" => "Ῥ",


    // Explicit final sigma
    "j" => "ς",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritical_set() {
        for c in [')', '(', '\\', '/', '=', '|', '+'] {
            assert!(is_diacritical(c), "{c:?} should be a diacritical");
        }
        for c in ['*', 'a', ',', ' ', '\''] {
            assert!(!is_diacritical(c), "{c:?} should not be a diacritical");
        }
    }

    #[test]
    fn test_every_value_is_one_code_point() {
        for (key, value) in STANDARD_MAPPINGS.entries() {
            assert_eq!(value.chars().count(), 1, "multi-char value for {key}");
        }
    }

    #[test]
    fn test_keys_use_beta_code_alphabet() {
        for key in STANDARD_MAPPINGS.keys() {
            assert!(
                key.chars()
                    .all(|c| c.is_ascii_lowercase() || c == CAPITAL_MARKER || is_diacritical(c)),
                "unexpected character in key {key}"
            );
        }
    }

    #[test]
    fn test_sample_composites() {
        assert_eq!(STANDARD_MAPPINGS.get("a)/|"), Some(&"ᾄ"));
        assert_eq!(STANDARD_MAPPINGS.get("w(="), Some(&"ὧ"));
        assert_eq!(STANDARD_MAPPINGS.get("*)/a"), Some(&"Ἄ"));
        assert_eq!(STANDARD_MAPPINGS.get("*(r"), Some(&"Ῥ"));
        assert_eq!(STANDARD_MAPPINGS.get("i+"), Some(&"ϊ"));
    }

    #[test]
    fn test_no_punctuation_keys() {
        for p in [",", ".", ":", ";", "'", "?"] {
            assert!(!STANDARD_MAPPINGS.contains_key(p));
        }
    }
}
