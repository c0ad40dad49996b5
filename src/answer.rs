//! Checking learner answers against an expected surface form.
//!
//! An answer is accepted if any relaxation in a fixed cascade makes it equal
//! to the expected form. The first relaxation which matches is reported.

mod kanji;


use std::fmt;

use serde::Serialize;

use crate::kana;

/// Endings of the "must" form which may be used interchangeably.
const MUST: [&str; 2] = ["なければならない", "なければなりません"];

/// Colloquial variants of the "must" form, accepted once both sides have
/// been converted to hiragana.
const MUST_EXTENDED: [&str; 6] = [
    "なければならない",
    "なければなりません",
    "なければいけない",
    "なければいけません",
    "なければだめ",
    "なければだめです",
];

const NAKEREBA: &str = "なければ";

/// The relaxation which caused an answer to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relaxation {
    /// The answer is identical after whitespace has been removed.
    Exact,
    /// The answer uses another ending of the "must" form.
    Must,
    /// The answer is identical once kanji are replaced by their readings.
    Hiragana,
    /// The answer spells a long vowel with ー or with a doubled vowel.
    LongVowel,
    /// The answer contains romaji where a sokuon was expected.
    SmallTsu,
    /// The answer spells the particles は, へ and を as they are pronounced.
    Particle,
}

impl Relaxation {
    pub const ALL: [Relaxation; 6] = [
        Relaxation::Exact,
        Relaxation::Must,
        Relaxation::Hiragana,
        Relaxation::LongVowel,
        Relaxation::SmallTsu,
        Relaxation::Particle,
    ];

    pub fn ident(&self) -> &'static str {
        match self {
            Relaxation::Exact => "exact",
            Relaxation::Must => "must",
            Relaxation::Hiragana => "hiragana",
            Relaxation::LongVowel => "long-vowel",
            Relaxation::SmallTsu => "small-tsu",
            Relaxation::Particle => "particle",
        }
    }

    /// Human readable description of the relaxation.
    pub fn describe(&self) -> &'static str {
        match self {
            Relaxation::Exact => "exact match",
            Relaxation::Must => "alternative ending of the must form",
            Relaxation::Hiragana => "kana spelling of kanji",
            Relaxation::LongVowel => "long vowel written with ー",
            Relaxation::SmallTsu => "romaji consonant instead of っ",
            Relaxation::Particle => "particle spelled as pronounced",
        }
    }
}

impl fmt::Display for Relaxation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

/// Test if `actual` is an acceptable answer where `expected` was asked for.
///
/// This is not symmetric in general.
pub fn is_equivalent(expected: &str, actual: &str) -> bool {
    check(expected, actual).is_some()
}

/// Check an answer, returning the relaxation that accepted it.
pub fn check(expected: &str, actual: &str) -> Option<Relaxation> {
    let expected = normalize(expected);
    let actual = normalize(actual);

    if expected == actual {
        return Some(Relaxation::Exact);
    }

    if ends_with_any(&expected, &MUST) && must_matches(&expected, &actual) {
        tracing::trace!(%expected, %actual, "Must ending");
        return Some(Relaxation::Must);
    }

    let hiragana_expected = to_hiragana(&expected);
    let hiragana_actual = to_hiragana(&actual);

    if ends_with_any(&expected, &MUST) && must_matches(&hiragana_expected, &hiragana_actual) {
        tracing::trace!(%expected, %actual, "Must ending in hiragana");
        return Some(Relaxation::Must);
    }

    if (hiragana_expected.contains(NAKEREBA) || hiragana_actual.contains(NAKEREBA))
        && ends_with_any(&hiragana_expected, &MUST_EXTENDED)
        && ends_with_any(&hiragana_actual, &MUST_EXTENDED)
        && before_nakereba(&hiragana_expected) == before_nakereba(&hiragana_actual)
    {
        tracing::trace!(%expected, %actual, "Colloquial must ending");
        return Some(Relaxation::Must);
    }

    if hiragana_expected == hiragana_actual {
        return Some(Relaxation::Hiragana);
    }

    let long_expected = long_vowel(&expected);
    let long_actual = long_vowel(&actual);
    let long_hiragana_expected = long_vowel(&hiragana_expected);
    let long_hiragana_actual = long_vowel(&hiragana_actual);

    if long_expected == long_actual || long_hiragana_expected == long_hiragana_actual {
        return Some(Relaxation::LongVowel);
    }

    if small_tsu(&expected) == small_tsu(&actual)
        || small_tsu(&hiragana_expected) == small_tsu(&hiragana_actual)
    {
        return Some(Relaxation::SmallTsu);
    }

    if particles(&long_expected) == particles(&long_actual)
        || particles(&long_hiragana_expected) == particles(&long_hiragana_actual)
    {
        return Some(Relaxation::Particle);
    }

    tracing::trace!(%expected, %actual, "No relaxation matched");
    None
}

/// Remove all whitespace.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every known kanji with its hiragana reading.
///
/// The reading of a kanji may depend on the kana following it, so 来ます
/// becomes きます while 来ない becomes こない. Unknown kanji are kept as-is.
pub fn to_hiragana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let len = match kanji::substitute(rest) {
            Some((reading, len)) => {
                out.push_str(reading);
                len
            }
            None => {
                out.push(c);
                c.len_utf8()
            }
        };

        rest = &rest[len..];
    }

    out
}

fn ends_with_any(text: &str, endings: &[&str]) -> bool {
    endings.iter().any(|ending| text.ends_with(ending))
}

/// Strip the first matching ending, if any.
fn strip_any<'a>(text: &'a str, endings: &[&str]) -> &'a str {
    endings
        .iter()
        .find_map(|ending| text.strip_suffix(ending))
        .unwrap_or(text)
}

/// Test that both sides share a stem and `actual` uses either "must"
/// ending.
fn must_matches(expected: &str, actual: &str) -> bool {
    ends_with_any(actual, &MUST) && strip_any(expected, &MUST) == strip_any(actual, &MUST)
}

fn before_nakereba(text: &str) -> &str {
    match text.find(NAKEREBA) {
        Some(n) => &text[..n],
        None => text,
    }
}

/// Spell a vowel followed by ー as a doubled vowel, like あー as ああ.
fn long_vowel(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut it = text.chars().peekable();

    while let Some(c) = it.next() {
        out.push(c);

        if kana::is_hiragana_vowel(c) && it.next_if_eq(&kana::LONG_VOWEL_MARK).is_some() {
            out.push(c);
        }
    }

    out
}

/// Spell っ followed by a romaji consonant as that consonant doubled.
fn small_tsu(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut it = text.chars().peekable();

    while let Some(c) = it.next() {
        match it.next_if(|&n| c == 'っ' && kana::is_romaji_consonant(n)) {
            Some(n) => {
                out.push(n);
                out.push(n);
            }
            None => out.push(c),
        }
    }

    out
}

/// Spell the particles は, へ and を as pronounced.
fn particles(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'は' => 'わ',
            'へ' => 'え',
            'を' => 'お',
            c => c,
        })
        .collect()
}
