//! Verb records and stem extraction.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, VerbError};
use crate::inflection::godan::Row;
use crate::inflection::{self, FormKey, Formality, Polarity, Tense};

/// The conjugation class of a regular verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Class {
    Ichidan,
    Godan,
}

impl Class {
    pub fn ident(&self) -> &'static str {
        match self {
            Class::Ichidan => "ichidan",
            Class::Godan => "godan",
        }
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

/// A regular ichidan or godan verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regular {
    pub dictionary: String,
    pub kana: String,
    pub meaning: String,
    pub class: Class,
    /// Row of the dictionary-form-final kana, only meaningful for godan
    /// verbs.
    pub row: Option<Row>,
}

/// An irregular verb with explicit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Irregular {
    pub dictionary: String,
    pub kana: String,
    pub meaning: String,
    /// Explicit surface forms which take precedence over every rule.
    pub overrides: BTreeMap<FormKey, String>,
    /// Class used for forms which are neither overridden nor covered by the
    /// built-in irregular tables. This is rarely linguistically correct.
    pub fallback: Class,
}

/// A verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Record", into = "Record")]
pub enum Verb {
    Regular(Regular),
    Irregular(Irregular),
}

impl Verb {
    /// Construct an ichidan verb.
    pub fn ichidan(dictionary: &str, kana: &str, meaning: &str) -> Self {
        Verb::Regular(Regular {
            dictionary: dictionary.to_owned(),
            kana: kana.to_owned(),
            meaning: meaning.to_owned(),
            class: Class::Ichidan,
            row: None,
        })
    }

    /// Construct a godan verb, classifying its row from the final kana of
    /// the dictionary form.
    pub fn godan(dictionary: &str, kana: &str, meaning: &str) -> Self {
        Verb::Regular(Regular {
            dictionary: dictionary.to_owned(),
            kana: kana.to_owned(),
            meaning: meaning.to_owned(),
            class: Class::Godan,
            row: dictionary.chars().next_back().and_then(Row::from_kana),
        })
    }

    /// Construct an irregular verb.
    pub fn irregular<I, K>(
        dictionary: &str,
        kana: &str,
        meaning: &str,
        fallback: Class,
        overrides: I,
    ) -> Self
    where
        I: IntoIterator<Item = (FormKey, K)>,
        K: Into<String>,
    {
        Verb::Irregular(Irregular {
            dictionary: dictionary.to_owned(),
            kana: kana.to_owned(),
            meaning: meaning.to_owned(),
            overrides: overrides.into_iter().map(|(k, v)| (k, v.into())).collect(),
            fallback,
        })
    }

    /// The dictionary form.
    pub fn dictionary(&self) -> &str {
        match self {
            Verb::Regular(verb) => &verb.dictionary,
            Verb::Irregular(verb) => &verb.dictionary,
        }
    }

    /// The kana reading of the dictionary form.
    pub fn kana(&self) -> &str {
        match self {
            Verb::Regular(verb) => &verb.kana,
            Verb::Irregular(verb) => &verb.kana,
        }
    }

    /// English meaning.
    pub fn meaning(&self) -> &str {
        match self {
            Verb::Regular(verb) => &verb.meaning,
            Verb::Irregular(verb) => &verb.meaning,
        }
    }

    /// The class of this verb, as it appears in verb records.
    pub fn record_class(&self) -> RecordClass {
        match self {
            Verb::Regular(verb) => match verb.class {
                Class::Ichidan => RecordClass::Ichidan,
                Class::Godan => RecordClass::Godan,
            },
            Verb::Irregular(..) => RecordClass::Irregular,
        }
    }

    /// The conjugation base stem.
    ///
    /// * Ichidan verbs drop their final character.
    /// * Godan verbs keep their dictionary form, see [`Verb::consonant_stem`].
    /// * Irregular verbs use a hand-mapped root, する → し and 来る → 来,
    ///   otherwise their dictionary form.
    pub fn stem(&self) -> &str {
        match self {
            Verb::Regular(verb) => match verb.class {
                Class::Ichidan => drop_last(&verb.dictionary),
                Class::Godan => &verb.dictionary,
            },
            Verb::Irregular(verb) => irregular_root(&verb.dictionary).unwrap_or(&verb.dictionary),
        }
    }

    /// The dictionary form with its final kana dropped, which godan sound
    /// row fragments attach to.
    pub fn consonant_stem(&self) -> &str {
        drop_last(self.dictionary())
    }

    /// Conjugate this verb.
    pub fn conjugate(&self, tense: Tense, polarity: Polarity, formality: Formality) -> String {
        inflection::conjugate(self, tense, polarity, formality)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dictionary() != self.kana() {
            write!(f, "{} ({})", self.dictionary(), self.kana())
        } else {
            self.dictionary().fmt(f)
        }
    }
}

pub(crate) fn drop_last(s: &str) -> &str {
    let mut it = s.chars();
    it.next_back();
    it.as_str()
}

/// Hand-mapped roots of the irregular lexemes.
pub(crate) fn irregular_root(dictionary: &str) -> Option<&'static str> {
    match dictionary {
        "する" => Some("し"),
        "来る" => Some("来"),
        _ => None,
    }
}

/// The class keyword of a verb record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordClass {
    Ichidan,
    Godan,
    Irregular,
}

impl RecordClass {
    pub fn ident(&self) -> &'static str {
        match self {
            RecordClass::Ichidan => "ichidan",
            RecordClass::Godan => "godan",
            RecordClass::Irregular => "irregular",
        }
    }

    pub fn parse_keyword(string: &str) -> Option<RecordClass> {
        match string {
            "ichidan" => Some(RecordClass::Ichidan),
            "godan" => Some(RecordClass::Godan),
            "irregular" => Some(RecordClass::Irregular),
            _ => None,
        }
    }
}

impl fmt::Display for RecordClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

impl FromStr for RecordClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordClass::parse_keyword(s).ok_or_else(|| ParseError::Class(s.to_owned()))
    }
}

/// The flat serialized shape of a verb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub dictionary: String,
    #[serde(default)]
    pub kana: String,
    #[serde(default)]
    pub meaning: String,
    pub class: RecordClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<Row>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<FormKey, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Class>,
}

impl TryFrom<Record> for Verb {
    type Error = VerbError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let Some(last) = record.dictionary.chars().next_back() else {
            return Err(VerbError::EmptyDictionary);
        };

        let kana = if record.kana.is_empty() {
            record.dictionary.clone()
        } else {
            record.kana
        };

        let class = match record.class {
            RecordClass::Ichidan => Class::Ichidan,
            RecordClass::Godan => Class::Godan,
            RecordClass::Irregular => {
                return Ok(Verb::Irregular(Irregular {
                    dictionary: record.dictionary,
                    kana,
                    meaning: record.meaning,
                    overrides: record.overrides,
                    fallback: record.fallback.unwrap_or(Class::Godan),
                }));
            }
        };

        if !record.overrides.is_empty() {
            return Err(VerbError::UnexpectedOverrides(
                record.dictionary,
                class.ident(),
            ));
        }

        match (class, record.row) {
            (Class::Ichidan, _) if last != 'る' => {
                return Err(VerbError::IchidanEnding(record.dictionary));
            }
            (Class::Godan, Some(row)) if row.kana() != last => {
                return Err(VerbError::RowMismatch {
                    dictionary: record.dictionary,
                    row: row.ident(),
                    expected: row.kana(),
                });
            }
            _ => {}
        }

        Ok(Verb::Regular(Regular {
            dictionary: record.dictionary,
            kana,
            meaning: record.meaning,
            class,
            row: match class {
                Class::Ichidan => None,
                Class::Godan => record.row,
            },
        }))
    }
}

impl From<Verb> for Record {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Regular(verb) => Record {
                dictionary: verb.dictionary,
                kana: verb.kana,
                meaning: verb.meaning,
                class: match verb.class {
                    Class::Ichidan => RecordClass::Ichidan,
                    Class::Godan => RecordClass::Godan,
                },
                row: verb.row,
                overrides: BTreeMap::new(),
                fallback: None,
            },
            Verb::Irregular(verb) => Record {
                dictionary: verb.dictionary,
                kana: verb.kana,
                meaning: verb.meaning,
                class: RecordClass::Irregular,
                row: None,
                overrides: verb.overrides,
                fallback: Some(verb.fallback),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Class, Record, RecordClass, Verb};
    use crate::error::VerbError;
    use crate::inflection::godan::Row;
    use crate::inflection::{FormKey, Formality, Polarity, Tense};

    #[test]
    fn stems() {
        let taberu = Verb::ichidan("食べる", "たべる", "to eat");
        assert_eq!(taberu.stem(), "食べ");
        assert_eq!(taberu.consonant_stem(), "食べ");

        let nomu = Verb::godan("飲む", "のむ", "to drink");
        assert_eq!(nomu.stem(), "飲む");
        assert_eq!(nomu.consonant_stem(), "飲");

        let kuru = Verb::irregular(
            "来る",
            "くる",
            "to come",
            Class::Ichidan,
            [(FormKey::new(Tense::Past, Polarity::Affirmative, Formality::Plain), "来た")],
        );
        assert_eq!(kuru.stem(), "来");

        let suru = Verb::irregular(
            "する",
            "する",
            "to do",
            Class::Ichidan,
            Vec::<(FormKey, String)>::new(),
        );
        assert_eq!(suru.stem(), "し");
    }

    #[test]
    fn single_character_stem() {
        let verb = Verb::ichidan("る", "る", "");
        assert_eq!(verb.stem(), "");
    }

    #[test]
    fn godan_row_is_classified() {
        let Verb::Regular(verb) = Verb::godan("泳ぐ", "およぐ", "to swim") else {
            panic!("expected regular verb");
        };

        assert_eq!(verb.row, Some(Row::Gu));
    }

    #[test]
    fn records_are_validated() {
        let record = |dictionary: &str, class, row| Record {
            dictionary: dictionary.to_owned(),
            kana: String::new(),
            meaning: String::new(),
            class,
            row,
            overrides: Default::default(),
            fallback: None,
        };

        assert_eq!(
            Verb::try_from(record("", RecordClass::Ichidan, None)),
            Err(VerbError::EmptyDictionary)
        );

        assert_eq!(
            Verb::try_from(record("飲む", RecordClass::Ichidan, None)),
            Err(VerbError::IchidanEnding("飲む".to_owned()))
        );

        assert!(matches!(
            Verb::try_from(record("飲む", RecordClass::Godan, Some(Row::Ku))),
            Err(VerbError::RowMismatch { .. })
        ));

        // Missing rows are accepted and degrade when conjugated.
        let verb = Verb::try_from(record("飲む", RecordClass::Godan, None)).unwrap();
        assert_eq!(verb.kana(), "飲む");
    }
}
