//! Name normalization for exact-match search
//!
//! Both the typed query and every card name go through the same function:
//! drop everything that is not a letter, transliterate what is left to
//! ASCII, keep ASCII letters only, lowercase. "P.E.K.K.A", "pekka" and
//! "Pékka" all end up as "pekka".
//!
//! Letters are picked out before transliteration. Symbols such as `©` or
//! `™` transliterate to letters and must not reach the key.

/// Reduce a name to its alphabetic key
pub fn normalize_name(name: &str) -> String {
    let letters: String = name.chars().filter(|c| c.is_alphabetic()).collect();

    deunicode::deunicode(&letters)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
