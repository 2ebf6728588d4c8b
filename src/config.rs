use log::warn;
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::error::Error;
use crate::{
    base::DEFAULT_BASE_TEXT,
    bass::{Bass, DEFAULT_BASS},
    decision::Strategy,
    environment::Snapshot,
};

/// Overrides the text returned by the base behavior.
pub const BASE_TEXT_VAR: &str = "TESTAPP_BASE_TEXT";
/// Overrides the field carried by `Bass`.
pub const BASS_VAR: &str = "TESTAPP_BASS";
/// Selects the decision strategy, see [`Strategy`].
pub const STRATEGY_VAR: &str = "TESTAPP_STRATEGY";

/// Application configuration.
///
/// Every field has a default, so an empty environment yields a usable
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    base_text: String,
    bass: String,
    strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_text: DEFAULT_BASE_TEXT.to_string(),
            bass: DEFAULT_BASS.to_string(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `TESTAPP_*` variables out of the environment entries of
    /// `snapshot`.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::from_vars(snapshot.env_vars())
    }

    /// Picks the `TESTAPP_*` variables out of `vars`.
    ///
    /// Unrelated keys are ignored. A strategy that does not parse is logged and
    /// replaced by the default one; configuration never stops the report.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                BASE_TEXT_VAR => config.set_base_text(value),
                BASS_VAR => config.set_bass(value),
                STRATEGY_VAR => match value.parse::<Strategy>() {
                    Ok(strategy) => config.set_strategy(strategy),
                    Err(err) => {
                        warn!("{}, using {}", err, Strategy::default());
                        config.set_strategy(Strategy::default());
                    }
                },
                _ => (),
            }
        }
        config
    }

    /// Parses a Json document; missing fields keep their defaults.
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn set_base_text(&mut self, base_text: impl Into<String>) {
        self.base_text = base_text.into();
    }

    pub fn base_text(&self) -> &str {
        &self.base_text
    }

    pub fn set_bass(&mut self, bass: impl Into<String>) {
        self.bass = bass.into();
    }

    pub fn bass(&self) -> &str {
        &self.bass
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Builds the derived variant described by this configuration.
    pub fn build_bass(&self) -> Bass {
        Bass::new(&*self.bass, &*self.base_text, self.strategy.provider())
    }
}
