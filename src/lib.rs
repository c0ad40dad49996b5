//! Conjugation of Japanese verbs, and checking of learner answers against
//! conjugated forms.

pub mod inflection;
pub use self::inflection::{conjugate, FormKey, Formality, Inflections, Polarity, Tense};

mod fragments;
pub use self::fragments::Fragments;

pub mod verb;
pub use self::verb::Verb;

pub mod verbs;

pub mod answer;
pub use self::answer::{is_equivalent, Relaxation};

pub mod kana;

mod error;
pub use self::error::{ParseError, VerbError};

pub mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;
