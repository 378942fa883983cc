use std::env::vars;

use chrono::Duration;
use serde::Deserialize;

use crate::i18n::Language;
use crate::page::DEFAULT_FEEDBACK_MS;

/// Longest accepted feedback display time: one day.
const MAX_FEEDBACK_MS: i64 = 24 * 60 * 60 * 1000;

/// Application settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    language: Language,
    feedback_ms: i64,
}

// Intermediate struct for deserializing environment variables where every
// field is optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    tally_language: Option<String>,
    tally_feedback_ms: Option<i64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            feedback_ms: DEFAULT_FEEDBACK_MS,
        }
    }
}

impl AppConfig {
    /// Reads `TALLY_LANGUAGE` and `TALLY_FEEDBACK_MS`.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    /// Like [`AppConfig::init`], falling back to defaults on error.
    pub fn init_or_default() -> Self {
        Self::init().unwrap_or_else(|err| {
            log::warn!("Invalid configuration, using defaults: {err:#}");
            Self::default()
        })
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            tally_language,
            tally_feedback_ms,
        } = raw;

        let language = match tally_language {
            Some(code) => Language::from_code(&code).ok_or_else(|| {
                anyhow::anyhow!("TALLY_LANGUAGE must be one of `es`, `en`, got `{code}`")
            })?,
            None => Language::default(),
        };

        let feedback_ms = match tally_feedback_ms {
            Some(ms) if ms > 0 && ms <= MAX_FEEDBACK_MS => ms,
            Some(ms) => anyhow::bail!(
                "TALLY_FEEDBACK_MS must be between 1 and {MAX_FEEDBACK_MS}, got {ms}"
            ),
            None => DEFAULT_FEEDBACK_MS,
        };

        Ok(Self {
            language,
            feedback_ms,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::milliseconds(self.feedback_ms)
    }
}
