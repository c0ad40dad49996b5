//! Module which performs verb conjugation, based on a verb's class.

use crate::fragments::Fragments;
use crate::inflection::godan::{self, Godan, Row};
use crate::inflection::irregular;
use crate::inflection::rules::{self, Base, Rule};
use crate::inflection::{FormKey, Formality, Polarity, Tense};
use crate::verb::{self, Class, Verb};

/// Conjugate a verb into the given form.
///
/// This never fails. Combinations that cannot be resolved, such as a godan
/// verb without a stem-ending row, produce the dictionary form unchanged.
pub fn conjugate(verb: &Verb, tense: Tense, polarity: Polarity, formality: Formality) -> String {
    conjugate_key(verb, FormKey::new(tense, polarity, formality))
}

pub(crate) fn conjugate_key(verb: &Verb, key: FormKey) -> String {
    if let Verb::Irregular(irregular) = verb {
        if let Some(form) = irregular.overrides.get(&key) {
            tracing::trace!(dictionary = %irregular.dictionary, %key, "Override");
            return form.clone();
        }
    }

    if let Some(lexeme) = irregular::lexeme(verb.dictionary()) {
        if let Some(form) = lexeme.get(key) {
            return form.to_owned();
        }

        tracing::debug!(
            dictionary = lexeme.dictionary,
            %key,
            "Irregular form missing, conjugating as ichidan"
        );

        return regular(verb, Class::Ichidan, None, key);
    }

    match verb {
        Verb::Regular(regular_verb) => regular(verb, regular_verb.class, regular_verb.row, key),
        Verb::Irregular(irregular) => {
            tracing::debug!(
                dictionary = %irregular.dictionary,
                fallback = %irregular.fallback,
                %key,
                "No override, conjugating with fallback class"
            );

            let row = match irregular.fallback {
                Class::Ichidan => None,
                Class::Godan => irregular.dictionary.chars().next_back().and_then(Row::from_kana),
            };

            regular(verb, irregular.fallback, row, key)
        }
    }
}

/// Conjugate a verb as though it belongs to the given class.
fn regular(verb: &Verb, class: Class, row: Option<Row>, key: FormKey) -> String {
    let Some(stems) = Stems::new(verb, class, row) else {
        tracing::warn!(
            dictionary = verb.dictionary(),
            "Godan verb is missing its stem-ending row"
        );

        return verb.dictionary().to_owned();
    };

    stems.inflect(key)
}

/// The bases a regular verb conjugates from.
enum Stems<'a> {
    Ichidan {
        stem: &'a str,
    },
    Godan {
        consonant: &'a str,
        table: &'static Godan,
    },
}

impl<'a> Stems<'a> {
    fn new(verb: &'a Verb, class: Class, row: Option<Row>) -> Option<Self> {
        let stems = match class {
            Class::Ichidan => {
                // Irregular lexemes falling through use their hand-mapped root.
                let stem: &'a str = match (verb, verb::irregular_root(verb.dictionary())) {
                    (_, Some(root)) => root,
                    (Verb::Regular(..), None) => verb.stem(),
                    (Verb::Irregular(..), None) => verb.consonant_stem(),
                };

                Stems::Ichidan { stem }
            }
            Class::Godan => Stems::Godan {
                consonant: verb.consonant_stem(),
                table: godan::table(row?, verb.dictionary()),
            },
        };

        Some(stems)
    }

    /// Assemble the given base.
    fn base(&self, base: Base) -> Fragments<'a> {
        match *self {
            Stems::Ichidan { stem } => Fragments::new([stem, base.ichidan]),
            Stems::Godan { consonant, table } => {
                let [a, b] = table.get(base.row);
                Fragments::new([consonant, a, b, base.godan])
            }
        }
    }

    fn inflect(&self, key: FormKey) -> String {
        match rules::rule(key.tense) {
            Rule::Table(cells) => {
                let (base, suffix) = cells[key.cell()];
                self.base(base).concat([suffix]).to_string()
            }
            Rule::Derived {
                tense,
                formality,
                suffix,
            } => {
                let mut form = self.inflect(FormKey::new(tense, key.polarity, formality));
                form.push_str(suffix);
                form
            }
        }
    }
}
