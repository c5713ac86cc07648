//! Procedure key normalisation.
//!
//! Procedure titles are Turkish ("Göz Kapağı Estetiği") while bundled asset
//! keys are ASCII snake case ("goz_kapagi"). Everything that compares the two
//! goes through this module so the payload builder and the image resolver
//! agree on one canonical form.

/// Combining dot above, left behind when `İ` is lowercased to `i̇`.
const COMBINING_DOT_ABOVE: char = '\u{0307}';

fn fold_char(c: char) -> Option<char> {
    match c {
        COMBINING_DOT_ABOVE => None,
        'ı' => Some('i'),
        'ğ' => Some('g'),
        'ü' => Some('u'),
        'ş' => Some('s'),
        'ö' => Some('o'),
        'ç' => Some('c'),
        other => Some(other),
    }
}

/// Lowercases `input` and folds the Turkish letters ı ğ ü ş ö ç onto their
/// ASCII base letters. Separators are left untouched.
#[must_use]
pub fn fold_turkish(input: &str) -> String {
    input.to_lowercase().chars().filter_map(fold_char).collect()
}

/// Canonical comparison form: folded, with underscores and all whitespace
/// removed. `"Burun Estetiği"`, `"burun_estetigi"` and `"BURUNESTETIGI"` all
/// normalise to `"burunestetigi"`.
#[must_use]
pub fn normalize_key(input: &str) -> String {
    fold_turkish(input)
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect()
}

/// Snake-case key synthesised from a title: folded, each whitespace run
/// collapsed into a single underscore.
#[must_use]
pub fn slug_key(input: &str) -> String {
    let folded = fold_turkish(input.trim());
    let mut out = String::with_capacity(folded.len());
    let mut in_gap = false;

    for c in folded.chars() {
        if c.is_whitespace() {
            if !in_gap {
                out.push('_');
                in_gap = true;
            }
        } else {
            out.push(c);
            in_gap = false;
        }
    }

    out
}

#[must_use]
pub fn keys_match(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}
