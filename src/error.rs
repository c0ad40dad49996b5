use thiserror::Error;

/// Error raised when parsing a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown tense `{0}`")]
    Tense(String),
    #[error("Unknown polarity `{0}`")]
    Polarity(String),
    #[error("Unknown formality `{0}`")]
    Formality(String),
    #[error("Unknown stem-ending row `{0}`")]
    Row(String),
    #[error("Unknown verb class `{0}`")]
    Class(String),
    #[error("Expected `tense-polarity-formality`, but got `{0}`")]
    FormKey(String),
}

/// Error raised when a verb record cannot be represented as a verb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerbError {
    #[error("Verb has an empty dictionary form")]
    EmptyDictionary,
    #[error("Ichidan verb `{0}` does not end in る")]
    IchidanEnding(String),
    #[error("Godan verb `{dictionary}` does not end in `{expected}` as its row `{row}` requires")]
    RowMismatch {
        dictionary: String,
        row: &'static str,
        expected: char,
    },
    #[error("Verb `{0}` of class `{1}` cannot have overrides")]
    UnexpectedOverrides(String, &'static str),
}
