//! Verb inflection: the form inventory and the rule engine producing surface
//! forms for it.

pub mod godan;
mod irregular;
mod rules;

pub use self::conjugate::conjugate;
mod conjugate;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::verb::Verb;

macro_rules! tense {
    ($vis:vis enum $name:ident { $({$variant:ident, $ident:literal, $describe:literal, $title:literal $(,)?}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize, Key)]
        #[serde(rename_all = "camelCase")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            $vis const ALL: [$name; 26] = [
                $($name::$variant,)*
            ];

            /// The keyword of the tense, as used in form keys.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Short Japanese label of the tense.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Longer title for the tense.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse a tense keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($ident => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

tense! {
    pub enum Tense {
        {Present, "present", "現在形", "present / non-past, the dictionary form"},
        {Past, "past", "過去形", "past tense"},
        {TeForm, "teForm", "て形", "～te form, connects actions and builds compound forms"},
        {Potential, "potential", "可能形", "potential, can do ~"},
        {Passive, "passive", "受身形", "passive, ~ is done to someone or something"},
        {Causative, "causative", "使役形", "causative, make / let ~ do something"},
        {Imperative, "imperative", "命令形", "command, do ~ / don't do ~"},
        {Volitional, "volitional", "意向形", "volitional, let's do ~ / probably won't ~"},
        {ConditionalBa, "conditionalBa", "仮定形", "～ば conditional, if ~"},
        {ConditionalTara, "conditionalTara", "～たら", "～たら conditional, if / when ~"},
        {Progressive, "progressive", "～ている", "～ている progressive, is doing ~"},
        {Desire, "desire", "～たい", "～たい, want to do ~"},
        {CausativePassive, "causativePassive", "使役受身形", "causative passive, is made to do ~"},
        {ConditionalNara, "conditionalNara", "～なら", "～なら conditional, if it is the case that ~"},
        {ConditionalTo, "conditionalTo", "～と", "～と conditional, whenever ~"},
        {Should, "should", "～べき", "～べき, should do ~"},
        {Must, "must", "～なければならない", "～なければならない, must do ~; the negative is ～なくてもいい, don't have to do ~"},
        {Attemptive, "attemptive", "～てみる", "～てみる, try doing ~"},
        {Preparatory, "preparatory", "～ておく", "～ておく, do ~ in advance"},
        {Regrettable, "regrettable", "～てしまう", "～てしまう, end up doing ~, do ~ completely"},
        {Giving, "giving", "～てあげる", "～てあげる, do ~ for someone"},
        {Receiving, "receiving", "～てくれる", "～てくれる, someone does ~ for me"},
        {ReceivingFavor, "receivingFavor", "～てもらう", "～てもらう, have someone do ~"},
        {Simultaneous, "simultaneous", "～ながら", "～ながら, while doing ~"},
        {PurposeGoing, "purposeGoing", "～に行く", "～に行く, go to do ~"},
        {PurposeComing, "purposeComing", "～に来る", "～に来る, come to do ~"},
    }
}

impl fmt::Display for Tense {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

impl FromStr for Tense {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tense::parse_keyword(s).ok_or_else(|| ParseError::Tense(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Key)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Affirmative, Polarity::Negative];

    pub fn ident(&self) -> &'static str {
        match self {
            Polarity::Affirmative => "affirmative",
            Polarity::Negative => "negative",
        }
    }

    pub fn parse_keyword(string: &str) -> Option<Polarity> {
        match string {
            "affirmative" => Some(Polarity::Affirmative),
            "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Polarity {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

impl FromStr for Polarity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polarity::parse_keyword(s).ok_or_else(|| ParseError::Polarity(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Key)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Plain,
    Polite,
}

impl Formality {
    pub const ALL: [Formality; 2] = [Formality::Plain, Formality::Polite];

    pub fn ident(&self) -> &'static str {
        match self {
            Formality::Plain => "plain",
            Formality::Polite => "polite",
        }
    }

    pub fn parse_keyword(string: &str) -> Option<Formality> {
        match string {
            "plain" => Some(Formality::Plain),
            "polite" => Some(Formality::Polite),
            _ => None,
        }
    }
}

impl fmt::Display for Formality {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

impl FromStr for Formality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formality::parse_keyword(s).ok_or_else(|| ParseError::Formality(s.to_owned()))
    }
}

/// Identifies one conjugated surface form of a verb.
///
/// Serialized as `tense-polarity-formality`, like `teForm-negative-plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey {
    pub tense: Tense,
    pub polarity: Polarity,
    pub formality: Formality,
}

impl FormKey {
    #[inline]
    pub const fn new(tense: Tense, polarity: Polarity, formality: Formality) -> Self {
        Self {
            tense,
            polarity,
            formality,
        }
    }

    /// Iterate over every form key, in tense, polarity and formality order.
    pub fn all() -> impl Iterator<Item = FormKey> {
        Tense::ALL.into_iter().flat_map(|tense| {
            Polarity::ALL.into_iter().flat_map(move |polarity| {
                Formality::ALL
                    .into_iter()
                    .map(move |formality| FormKey::new(tense, polarity, formality))
            })
        })
    }

    /// Index into a cell table ordered as affirmative plain, affirmative
    /// polite, negative plain and negative polite.
    pub(crate) fn cell(&self) -> usize {
        let polarity = match self.polarity {
            Polarity::Affirmative => 0,
            Polarity::Negative => 2,
        };

        let formality = match self.formality {
            Formality::Plain => 0,
            Formality::Polite => 1,
        };

        polarity + formality
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.tense, self.polarity, self.formality)
    }
}

impl FromStr for FormKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.split('-');

        let (Some(tense), Some(polarity), Some(formality), None) =
            (it.next(), it.next(), it.next(), it.next())
        else {
            return Err(ParseError::FormKey(s.to_owned()));
        };

        Ok(FormKey {
            tense: tense.parse()?,
            polarity: polarity.parse()?,
            formality: formality.parse()?,
        })
    }
}

impl TryFrom<String> for FormKey {
    type Error = ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormKey> for String {
    #[inline]
    fn from(value: FormKey) -> Self {
        value.to_string()
    }
}

/// Every conjugated form of a verb.
#[derive(Debug, Clone, Serialize)]
pub struct Inflections {
    pub dictionary: String,
    pub inflections: BTreeMap<FormKey, String>,
}

impl Inflections {
    /// Conjugate the verb into every form key.
    pub fn of(verb: &Verb) -> Self {
        Self::with_keys(verb, FormKey::all())
    }

    /// Conjugate the verb into the given form keys.
    pub fn with_keys<I>(verb: &Verb, keys: I) -> Self
    where
        I: IntoIterator<Item = FormKey>,
    {
        let mut inflections = BTreeMap::new();

        for key in keys {
            inflections.insert(key, conjugate::conjugate_key(verb, key));
        }

        Self {
            dictionary: verb.dictionary().to_owned(),
            inflections,
        }
    }

    /// Get a single inflection.
    pub fn get(&self, key: FormKey) -> Option<&str> {
        Some(self.inflections.get(&key)?.as_str())
    }

    /// Test if any polite inflections exist.
    pub fn has_polite(&self) -> bool {
        self.inflections
            .keys()
            .any(|key| key.formality == Formality::Polite)
    }

    /// Iterate over all inflections.
    pub fn iter(&self) -> impl Iterator<Item = (FormKey, &str)> + '_ {
        self.inflections.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
