//! Character set building for password generation.

use crate::config::Config;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!$%^&*()_+{}:@[];'#<>?,./|\\-=";

/// Removed from the lowercase class under `exclude_similar`.
pub const SIMILAR_LOWERCASE: &str = "ijlo";
/// Removed from the uppercase class under `exclude_similar`.
pub const SIMILAR_UPPERCASE: &str = "IJLO";
/// Removed from the digit class under `exclude_similar`.
pub const SIMILAR_DIGITS: &str = "01";
/// Removed from the symbol class under `exclude_ambiguous`.
pub const AMBIGUOUS_SYMBOLS: &str = "<>[](){}:;'/|\\,";

/// Build the character pool for a config.
///
/// An explicit set is taken verbatim. Otherwise the enabled classes are
/// appended in a fixed order (lowercase, uppercase, digits, symbols), each
/// filtered on its own before it is added so one class's exclusions never
/// touch another's characters.
///
/// Callers are expected to have rejected empty configs already.
pub fn build(config: &Config) -> Vec<char> {
    if let Some(explicit) = config.explicit_set() {
        return explicit.chars().collect();
    }

    let similar = config.exclude_similar;
    let ambiguous = config.exclude_ambiguous;
    let mut chars: Vec<char> = Vec::new();

    if config.include_lowercase {
        extend(&mut chars, LOWERCASE, similar.then_some(SIMILAR_LOWERCASE));
    }

    if config.include_uppercase {
        extend(&mut chars, UPPERCASE, similar.then_some(SIMILAR_UPPERCASE));
    }

    if config.include_numbers {
        extend(&mut chars, DIGITS, similar.then_some(SIMILAR_DIGITS));
    }

    if config.include_symbols {
        extend(&mut chars, SYMBOLS, ambiguous.then_some(AMBIGUOUS_SYMBOLS));
    }

    chars
}

fn extend(chars: &mut Vec<char>, class: &str, exclude: Option<&str>) {
    let exclude = exclude.unwrap_or("");
    chars.extend(class.chars().filter(|c| !exclude.contains(*c)));
}
