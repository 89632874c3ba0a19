use crate::demo::TypingPacing;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' (expected {expected})")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssistantMode {
    /// Canned keyword replies, no network.
    #[default]
    Demo,
    /// Chat-completion provider picked from the environment.
    Ai,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssistantConfig {
    pub mode: AssistantMode,
    pub pacing: TypingPacing,
}

impl AssistantConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `GUARDIAN_ASSISTANT_MODE` and the `GUARDIAN_TYPING_*_MS` pacing knobs.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("GUARDIAN_ASSISTANT_MODE") {
            None => AssistantMode::Demo,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "demo" => AssistantMode::Demo,
                "ai" => AssistantMode::Ai,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "GUARDIAN_ASSISTANT_MODE",
                        value: raw,
                        expected: "'demo' or 'ai'",
                    });
                }
            },
        };

        let defaults = TypingPacing::default();
        let millis = |key: &'static str, fallback: Duration| -> Result<Duration, ConfigError> {
            match lookup(key) {
                None => Ok(fallback),
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::Invalid {
                        key,
                        value: raw,
                        expected: "milliseconds",
                    }),
            }
        };

        let pacing = TypingPacing {
            base: millis("GUARDIAN_TYPING_BASE_MS", defaults.base)?,
            per_char: millis("GUARDIAN_TYPING_PER_CHAR_MS", defaults.per_char)?,
            max: millis("GUARDIAN_TYPING_MAX_MS", defaults.max)?,
        };

        Ok(Self { mode, pacing })
    }

    /// Like [`AssistantConfig::from_env`], but logs and falls back to defaults on bad input.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid assistant configuration, using defaults");
            Self::default()
        })
    }
}
