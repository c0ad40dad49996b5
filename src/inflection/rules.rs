//! Rule descriptors for every tense.
//!
//! A rule is either a table of four cells, each naming a [`Base`] and a fixed
//! suffix, or a derivation from another tense. Cells are ordered as
//! affirmative plain, affirmative polite, negative plain and negative polite,
//! see [`FormKey::cell`].
//!
//! [`FormKey::cell`]: super::FormKey::cell

use crate::inflection::godan::Sound;
use crate::inflection::{Formality, Tense};

/// Which base a suffix attaches to.
///
/// An ichidan verb uses its stem followed by `ichidan`. A godan verb uses its
/// consonant stem followed by the `row` fragment of its sound-row table and
/// then `godan`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Base {
    pub(super) ichidan: &'static str,
    pub(super) row: Sound,
    pub(super) godan: &'static str,
}

impl Base {
    const fn new(ichidan: &'static str, row: Sound, godan: &'static str) -> Self {
        Self { ichidan, row, godan }
    }
}

/// 食べる / 飲む
pub(super) const DICTIONARY: Base = Base::new("る", Sound::U, "");
/// 食べ / 飲み
pub(super) const MASU: Base = Base::new("", Sound::I, "");
/// 食べ / 飲ま
pub(super) const NAI: Base = Base::new("", Sound::A, "");
/// 食べて / 飲んで
pub(super) const TE: Base = Base::new("て", Sound::Te, "");
/// 食べた / 飲んだ
pub(super) const TA: Base = Base::new("た", Sound::Ta, "");
/// 食べれ / 飲め
pub(super) const BA: Base = Base::new("れ", Sound::E, "");
/// 食べろ / 飲め
pub(super) const COMMAND: Base = Base::new("ろ", Sound::E, "");
/// 食べよう / 飲もう
pub(super) const VOLITIONAL: Base = Base::new("よう", Sound::O, "う");
/// 食べられ / 飲め
pub(super) const POTENTIAL: Base = Base::new("られ", Sound::E, "");
/// 食べられ / 飲まれ
pub(super) const PASSIVE: Base = Base::new("られ", Sound::A, "れ");
/// 食べさせ / 飲ませ
pub(super) const CAUSATIVE: Base = Base::new("させ", Sound::A, "せ");
/// 食べさせられ / 飲ませられ
pub(super) const CAUSATIVE_PASSIVE: Base = Base::new("させられ", Sound::A, "せられ");

/// A single cell of a rule table.
pub(super) type Cell = (Base, &'static str);

#[derive(Debug, Clone, Copy)]
pub(super) enum Rule {
    /// Four cells, one per polarity and formality.
    Table([Cell; 4]),
    /// Conjugate another form and append a suffix. The polarity of the
    /// derived form is kept, while its formality is fixed.
    Derived {
        tense: Tense,
        formality: Formality,
        suffix: &'static str,
    },
}

/// Helper to build a table where every cell shares the same base.
const fn same(base: Base, suffixes: [&'static str; 4]) -> Rule {
    Rule::Table([
        (base, suffixes[0]),
        (base, suffixes[1]),
        (base, suffixes[2]),
        (base, suffixes[3]),
    ])
}

/// Helper to build a table for forms that conjugate like a regular verb
/// attached to the given base.
const fn verbal(base: Base) -> Rule {
    same(base, ["る", "ます", "ない", "ません"])
}

/// The rule used to produce the given tense.
pub(super) fn rule(tense: Tense) -> Rule {
    match tense {
        Tense::Present => Rule::Table([
            (DICTIONARY, ""),
            (MASU, "ます"),
            (NAI, "ない"),
            (MASU, "ません"),
        ]),
        Tense::Past => Rule::Table([
            (TA, ""),
            (MASU, "ました"),
            (NAI, "なかった"),
            (MASU, "ませんでした"),
        ]),
        Tense::TeForm => Rule::Table([(TE, ""), (TE, ""), (NAI, "なくて"), (NAI, "なくて")]),
        Tense::Potential => verbal(POTENTIAL),
        Tense::Passive => verbal(PASSIVE),
        Tense::Causative => verbal(CAUSATIVE),
        Tense::CausativePassive => verbal(CAUSATIVE_PASSIVE),
        Tense::Imperative => Rule::Table([
            (COMMAND, ""),
            (TE, "ください"),
            (DICTIONARY, "な"),
            (NAI, "ないでください"),
        ]),
        Tense::Volitional => Rule::Table([
            (VOLITIONAL, ""),
            (MASU, "ましょう"),
            (NAI, "ないだろう"),
            (NAI, "ないでしょう"),
        ]),
        Tense::ConditionalBa => Rule::Table([
            (BA, "ば"),
            (BA, "ば"),
            (NAI, "なければ"),
            (NAI, "なければ"),
        ]),
        Tense::ConditionalTara => Rule::Derived {
            tense: Tense::Past,
            formality: Formality::Plain,
            suffix: "ら",
        },
        Tense::ConditionalNara => Rule::Derived {
            tense: Tense::Present,
            formality: Formality::Plain,
            suffix: "なら",
        },
        Tense::ConditionalTo => Rule::Derived {
            tense: Tense::Present,
            formality: Formality::Plain,
            suffix: "と",
        },
        Tense::Progressive => same(TE, ["いる", "います", "いない", "いません"]),
        Tense::Desire => same(MASU, ["たい", "たいです", "たくない", "たくないです"]),
        Tense::Should => same(
            DICTIONARY,
            ["べき", "べきです", "べきではない", "べきではありません"],
        ),
        // The negative of "must" is "don't have to", not "must not".
        Tense::Must => same(
            NAI,
            [
                "なければならない",
                "なければなりません",
                "なくてもいい",
                "なくてもいいです",
            ],
        ),
        Tense::Attemptive => same(TE, ["みる", "みます", "みない", "みません"]),
        Tense::Preparatory => same(TE, ["おく", "おきます", "おかない", "おきません"]),
        Tense::Regrettable => same(TE, ["しまう", "しまいます", "しまわない", "しまいません"]),
        Tense::Giving => same(TE, ["あげる", "あげます", "あげない", "あげません"]),
        Tense::Receiving => same(TE, ["くれる", "くれます", "くれない", "くれません"]),
        Tense::ReceivingFavor => same(TE, ["もらう", "もらいます", "もらわない", "もらいません"]),
        // There is no negative ながら, the slot holds ～ないで, "without doing".
        Tense::Simultaneous => Rule::Table([
            (MASU, "ながら"),
            (MASU, "ながら"),
            (NAI, "ないで"),
            (NAI, "ないで"),
        ]),
        Tense::PurposeGoing => same(MASU, ["に行く", "に行きます", "に行かない", "に行きません"]),
        Tense::PurposeComing => same(MASU, ["に来る", "に来ます", "に来ない", "に来ません"]),
    }
}

