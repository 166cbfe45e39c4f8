//! Environment configuration for preset resolution
//!
//! The resolver never reads the process environment itself. Callers build a
//! [`PresetEnv`] (usually with [`PresetEnv::from_env`]) and pass it in.

use std::env::VarError;

use tracing::error;

/// Variable holding a JSON array of presets that replaces the built-ins
pub const PRESETS_VAR: &str = "VITE_QR_CODE_PRESETS";

/// Variable naming the preset selected before any user choice
pub const DEFAULT_PRESET_VAR: &str = "VITE_DEFAULT_PRESET";

/// Raw inputs for preset resolution.
///
/// Empty values are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresetEnv {
    /// Override list as JSON text
    pub presets_json: Option<String>,
    /// Name of the default preset
    pub default_name: Option<String>,
}

impl PresetEnv {
    /// Create an empty configuration (built-ins, first entry as default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Read both variables from the process environment.
    ///
    /// Only these two variables are inspected. A value that is not valid
    /// Unicode is logged and treated as unset.
    pub fn from_env() -> Self {
        Self {
            presets_json: read_var(PRESETS_VAR),
            default_name: read_var(DEFAULT_PRESET_VAR),
        }
    }

    /// Build from arbitrary key/value pairs; unrelated keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use qr_presets::PresetEnv;
    ///
    /// let env = PresetEnv::from_vars([("VITE_DEFAULT_PRESET", "Plain")]);
    /// assert_eq!(env.default_name.as_deref(), Some("Plain"));
    /// assert!(env.presets_json.is_none());
    /// ```
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            match key.as_ref() {
                PRESETS_VAR => env.presets_json = non_empty(value.into()),
                DEFAULT_PRESET_VAR => env.default_name = non_empty(value.into()),
                _ => {}
            }
        }
        env
    }

    pub fn with_presets_json(mut self, json: impl Into<String>) -> Self {
        self.presets_json = non_empty(json.into());
        self
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = non_empty(name.into());
        self
    }
}

fn read_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => non_empty(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            error!(variable = key, "Ignoring non-Unicode value");
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let env = PresetEnv::new();
        assert!(env.presets_json.is_none());
        assert!(env.default_name.is_none());
    }

    #[test]
    fn test_from_vars_picks_known_keys() {
        let env = PresetEnv::from_vars([
            ("PATH", "/usr/bin"),
            (PRESETS_VAR, "[]"),
            (DEFAULT_PRESET_VAR, "Dark"),
        ]);

        assert_eq!(env.presets_json.as_deref(), Some("[]"));
        assert_eq!(env.default_name.as_deref(), Some("Dark"));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let env = PresetEnv::from_vars([(PRESETS_VAR, ""), (DEFAULT_PRESET_VAR, "")]);
        assert_eq!(env, PresetEnv::new());

        let env = PresetEnv::new().with_presets_json("").with_default_name("");
        assert_eq!(env, PresetEnv::new());
    }

    #[test]
    fn test_builders() {
        let env = PresetEnv::new()
            .with_presets_json("[{}]")
            .with_default_name("Plain");

        assert_eq!(env.presets_json.as_deref(), Some("[{}]"));
        assert_eq!(env.default_name.as_deref(), Some("Plain"));
    }
}
