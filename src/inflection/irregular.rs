//! Hand-written tables for the irregular lexemes する and 来る.
//!
//! Each lexeme is one row of data keyed by its dictionary form. Cells are in
//! the same order as rule tables: affirmative plain, affirmative polite,
//! negative plain and negative polite.

use crate::inflection::{FormKey, Tense};

/// An irregular lexeme.
#[derive(Debug)]
pub(super) struct Lexeme {
    pub(super) dictionary: &'static str,
    forms: &'static [(Tense, [&'static str; 4])],
}

impl Lexeme {
    /// Get the surface form for the given key, if the lexeme covers it.
    pub(super) fn get(&self, key: FormKey) -> Option<&'static str> {
        let (_, cells) = self.forms.iter().find(|(tense, _)| *tense == key.tense)?;
        Some(cells[key.cell()])
    }
}

/// Setup a lexeme table.
macro_rules! lexeme {
    ($dictionary:literal, $($tense:ident($($cell:literal),* $(,)?)),* $(,)?) => {
        Lexeme {
            dictionary: $dictionary,
            forms: &[$((Tense::$tense, [$($cell),*]),)*],
        }
    };
}

static SURU: Lexeme = lexeme! {
    "する",
    Present("する", "します", "しない", "しません"),
    Past("した", "しました", "しなかった", "しませんでした"),
    TeForm("して", "して", "しなくて", "しなくて"),
    Potential("できる", "できます", "できない", "できません"),
    Passive("される", "されます", "されない", "されません"),
    Causative("させる", "させます", "させない", "させません"),
    Imperative("しろ", "してください", "するな", "しないでください"),
    Volitional("しよう", "しましょう", "しないだろう", "しないでしょう"),
    ConditionalBa("すれば", "すれば", "しなければ", "しなければ"),
    ConditionalTara("したら", "したら", "しなかったら", "しなかったら"),
    Progressive("している", "しています", "していない", "していません"),
    Desire("したい", "したいです", "したくない", "したくないです"),
    CausativePassive("させられる", "させられます", "させられない", "させられません"),
    ConditionalNara("するなら", "するなら", "しないなら", "しないなら"),
    ConditionalTo("すると", "すると", "しないと", "しないと"),
    Should("するべき", "するべきです", "するべきではない", "するべきではありません"),
    Must("しなければならない", "しなければなりません", "しなくてもいい", "しなくてもいいです"),
    Attemptive("してみる", "してみます", "してみない", "してみません"),
    Preparatory("しておく", "しておきます", "しておかない", "しておきません"),
    Regrettable("してしまう", "してしまいます", "してしまわない", "してしまいません"),
    Giving("してあげる", "してあげます", "してあげない", "してあげません"),
    Receiving("してくれる", "してくれます", "してくれない", "してくれません"),
    ReceivingFavor("してもらう", "してもらいます", "してもらわない", "してもらいません"),
    Simultaneous("しながら", "しながら", "しないで", "しないで"),
    PurposeGoing("しに行く", "しに行きます", "しに行かない", "しに行きません"),
    PurposeComing("しに来る", "しに来ます", "しに来ない", "しに来ません"),
};

static KURU: Lexeme = lexeme! {
    "来る",
    Present("来る", "来ます", "来ない", "来ません"),
    Past("来た", "来ました", "来なかった", "来ませんでした"),
    TeForm("来て", "来て", "来なくて", "来なくて"),
    Potential("来られる", "来られます", "来られない", "来られません"),
    Passive("来られる", "来られます", "来られない", "来られません"),
    Causative("来させる", "来させます", "来させない", "来させません"),
    Imperative("来い", "来てください", "来るな", "来ないでください"),
    Volitional("来よう", "来ましょう", "来まい", "来ないでしょう"),
    ConditionalBa("来れば", "来れば", "来なければ", "来なければ"),
    ConditionalTara("来たら", "来たら", "来なかったら", "来なかったら"),
    Progressive("来ている", "来ています", "来ていない", "来ていません"),
    Desire("来たい", "来たいです", "来たくない", "来たくないです"),
    CausativePassive("来させられる", "来させられます", "来させられない", "来させられません"),
    ConditionalNara("来るなら", "来るなら", "来ないなら", "来ないなら"),
    ConditionalTo("来ると", "来ると", "来ないと", "来ないと"),
    Should("来るべき", "来るべきです", "来るべきではない", "来るべきではありません"),
    Must("来なければならない", "来なければなりません", "来なくてもいい", "来なくてもいいです"),
    Attemptive("来てみる", "来てみます", "来てみない", "来てみません"),
    Preparatory("来ておく", "来ておきます", "来ておかない", "来ておきません"),
    Regrettable("来てしまう", "来てしまいます", "来てしまわない", "来てしまいません"),
    Giving("来てあげる", "来てあげます", "来てあげない", "来てあげません"),
    Receiving("来てくれる", "来てくれます", "来てくれない", "来てくれません"),
    ReceivingFavor("来てもらう", "来てもらいます", "来てもらわない", "来てもらいません"),
    Simultaneous("来ながら", "来ながら", "来ないで", "来ないで"),
    // "Going in order to come" has no natural ～に form, ために is used instead.
    PurposeGoing("来るために行く", "来るために行きます", "来るために行かない", "来るために行きません"),
    PurposeComing("来るために来る", "来るために来ます", "来るために来ない", "来るために来ません"),
};

static LEXEMES: [&Lexeme; 2] = [&SURU, &KURU];

/// Look up the irregular lexeme with the given dictionary form.
pub(super) fn lexeme(dictionary: &str) -> Option<&'static Lexeme> {
    LEXEMES
        .iter()
        .copied()
        .find(|lexeme| lexeme.dictionary == dictionary)
}
