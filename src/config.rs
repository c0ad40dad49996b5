use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fixed_map::Set;
use serde::{Deserialize, Serialize};

use crate::inflection::{FormKey, Formality, Polarity, Tense};
use crate::verb::Verb;
use crate::{verbs, Dirs};

/// A configuration used for the application.
///
/// An empty set of tenses, polarities or formalities enables every value
/// along that axis.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enabled tenses.
    #[serde(skip_serializing_if = "Set::is_empty")]
    pub tenses: Set<Tense>,
    /// Enabled polarities.
    #[serde(skip_serializing_if = "Set::is_empty")]
    pub polarities: Set<Polarity>,
    /// Enabled formalities.
    #[serde(skip_serializing_if = "Set::is_empty")]
    pub formalities: Set<Formality>,
    /// Additional verbs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verbs: Vec<Verb>,
}

impl Config {
    /// Load the configuration from the default location, falling back to
    /// the default configuration if it doesn't exist.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No configuration");
            return Ok(Self::default());
        }

        Self::from_path(&config_path)
    }

    /// Load the configuration from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| path.display().to_string())?;
        let config = toml::from_str(&data).with_context(|| path.display().to_string())?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Test if the given form key is enabled.
    pub fn is_enabled(&self, key: FormKey) -> bool {
        (self.tenses.is_empty() || self.tenses.contains(key.tense))
            && (self.polarities.is_empty() || self.polarities.contains(key.polarity))
            && (self.formalities.is_empty() || self.formalities.contains(key.formality))
    }

    /// Iterate over enabled form keys, in tense, polarity and formality
    /// order.
    pub fn keys(&self) -> impl Iterator<Item = FormKey> + '_ {
        FormKey::all().filter(|key| self.is_enabled(*key))
    }

    /// Every known verb: the configured ones followed by the built-in list.
    ///
    /// Configured verbs come first so that they shadow built-in verbs in
    /// lookups.
    pub fn verbs(&self) -> Vec<Verb> {
        let mut all = self.verbs.clone();
        all.extend(verbs::builtin());
        all
    }
}
