//! Color-word swapping for descriptions
//!
//! When a fixture is transposed, its hand-written description usually still
//! talks about the wrong side ("White mates in one"). [`swap_color_words`]
//! rewrites those references so the text matches the mirrored position.
//!
//! Matching is on substrings, in one left-to-right pass: `white` <-> `black` and
//! `White` <-> `Black`. Each occurrence is rewritten exactly once, so swapping
//! twice returns the original text. Words that merely contain a color
//! (`Whitehall`) are rewritten too, and all-caps forms (`WHITE`) are left alone.

/// Color words and their replacements, checked in order at each position
const SWAPS: [(&str, &str); 4] = [
    ("white", "black"),
    ("black", "white"),
    ("White", "Black"),
    ("Black", "White"),
];

/// Swap color words in an optional description
///
/// `None` passes through unchanged.
pub fn swap_color_words(text: Option<&str>) -> Option<String> {
    text.map(swap_in)
}

fn swap_in(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        for (from, to) in SWAPS {
            if let Some(tail) = rest.strip_prefix(from) {
                out.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
