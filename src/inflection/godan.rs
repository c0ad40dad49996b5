//! Godan sound-row tables.
//!
//! Every godan sound change performed by the rule engine is looked up here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The consonant row a godan verb's dictionary-form-final kana belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Row {
    U,
    Ku,
    Gu,
    Su,
    Tsu,
    Nu,
    Bu,
    Mu,
    Ru,
}

impl Row {
    pub const ALL: [Row; 9] = [
        Row::U,
        Row::Ku,
        Row::Gu,
        Row::Su,
        Row::Tsu,
        Row::Nu,
        Row::Bu,
        Row::Mu,
        Row::Ru,
    ];

    /// The keyword of the row.
    pub fn ident(&self) -> &'static str {
        match self {
            Row::U => "u",
            Row::Ku => "ku",
            Row::Gu => "gu",
            Row::Su => "su",
            Row::Tsu => "tsu",
            Row::Nu => "nu",
            Row::Bu => "bu",
            Row::Mu => "mu",
            Row::Ru => "ru",
        }
    }

    /// Parse a row keyword.
    pub fn parse_keyword(string: &str) -> Option<Row> {
        Row::ALL.into_iter().find(|row| row.ident() == string)
    }

    /// Classify the final kana of a dictionary form.
    pub fn from_kana(c: char) -> Option<Row> {
        let row = match c {
            'う' => Row::U,
            'く' => Row::Ku,
            'ぐ' => Row::Gu,
            'す' => Row::Su,
            'つ' => Row::Tsu,
            'ぬ' => Row::Nu,
            'ぶ' => Row::Bu,
            'む' => Row::Mu,
            'る' => Row::Ru,
            _ => return None,
        };

        Some(row)
    }

    /// The dictionary-form-final kana of the row.
    pub fn kana(&self) -> char {
        match self {
            Row::U => 'う',
            Row::Ku => 'く',
            Row::Gu => 'ぐ',
            Row::Su => 'す',
            Row::Tsu => 'つ',
            Row::Nu => 'ぬ',
            Row::Bu => 'ぶ',
            Row::Mu => 'む',
            Row::Ru => 'る',
        }
    }

    /// The sound-row table for this row.
    pub(crate) fn godan(&self) -> &'static Godan {
        match self {
            Row::U => U,
            Row::Ku => KU,
            Row::Gu => GU,
            Row::Su => SU,
            Row::Tsu => TSU,
            Row::Nu => NU,
            Row::Bu => BU,
            Row::Mu => MU,
            Row::Ru => RU,
        }
    }
}

impl fmt::Display for Row {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

impl FromStr for Row {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Row::parse_keyword(s).ok_or_else(|| ParseError::Row(s.to_owned()))
    }
}

/// A vowel-row selector into a [`Godan`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sound {
    A,
    I,
    U,
    E,
    O,
    Te,
    /// The past fragment, derived from the te fragment.
    Ta,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Godan {
    pub(super) a: &'static str,
    pub(super) i: &'static str,
    pub(super) u: &'static str,
    pub(super) e: &'static str,
    pub(super) o: &'static str,
    pub(super) te: &'static str,
}

impl Godan {
    /// Select the fragments for the given sound. Every fragment except
    /// [`Sound::Ta`] is a single fragment, the past fragment replaces the
    /// final て / で of the te fragment with た / だ.
    pub(crate) fn get(&self, sound: Sound) -> [&'static str; 2] {
        match sound {
            Sound::A => [self.a, ""],
            Sound::I => [self.i, ""],
            Sound::U => [self.u, ""],
            Sound::E => [self.e, ""],
            Sound::O => [self.o, ""],
            Sound::Te => [self.te, ""],
            Sound::Ta => {
                let mut it = self.te.chars();

                let ta = match it.next_back() {
                    Some('で') => "だ",
                    _ => "た",
                };

                [it.as_str(), ta]
            }
        }
    }
}

/// The U godan table.
pub(super) static U: &Godan = &Godan {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "って",
};

/// The KU godan table.
pub(super) static KU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "いて",
};

/// The GU godan table.
pub(super) static GU: &Godan = &Godan {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
    te: "いで",
};

/// The SU godan table.
pub(super) static SU: &Godan = &Godan {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
    te: "して",
};

/// The TSU godan table.
pub(super) static TSU: &Godan = &Godan {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
    te: "って",
};

/// The NU godan table.
pub(super) static NU: &Godan = &Godan {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
    te: "んで",
};

/// The BU godan table.
pub(super) static BU: &Godan = &Godan {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
    te: "んで",
};

/// The MU godan table.
pub(super) static MU: &Godan = &Godan {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
    te: "んで",
};

/// The RU godan table.
pub(super) static RU: &Godan = &Godan {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
    te: "って",
};

/// The IKU/YUKU godan table.
pub(super) static IKU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "って",
};

/// Pick the table to use for a godan verb, taking 行く into account.
pub(crate) fn table(row: Row, dictionary: &str) -> &'static Godan {
    if row == Row::Ku && is_iku(dictionary) {
        return IKU;
    }

    row.godan()
}

fn is_iku(dictionary: &str) -> bool {
    ["行く", "いく", "ゆく", "逝く", "往く"]
        .iter()
        .any(|suffix| dictionary.ends_with(suffix))
}
