//! Miscellaneous helper functions and type aliases used throughout the crate.

use std::collections::{HashMap, HashSet};
use std::fmt::Formatter;

/// The hash map type used for the static lookup tables.
pub type TigerHashMap<K, V> = HashMap<K, V, ahash::RandomState>;
/// The hash set type used for the static lookup tables.
pub type TigerHashSet<T> = HashSet<T, ahash::RandomState>;

/// Write a list of choices separated by commas, with `word` ("or", "and") before the last one.
pub fn display_choices(f: &mut Formatter, v: &[&str], word: &str) -> Result<(), std::fmt::Error> {
    for i in 0..v.len() {
        write!(f, "{}", v[i])?;
        if i + 1 == v.len() {
        } else if i + 2 == v.len() {
            write!(f, " {word} ")?;
        } else {
            write!(f, ", ")?;
        }
    }
    Ok(())
}

/// Stage blocks in traits and tracks are keyed by plain numbers, like `50 = { ... }`.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Case-insensitive `starts_with`, for matching what the user has typed so far.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    for p in prefix.chars() {
        match chars.next() {
            Some(c) if c.to_lowercase().eq(p.to_lowercase()) => (),
            _ => return false,
        }
    }
    true
}
