//! The resolved, immutable preset catalog
//!
//! `PresetCatalog::resolve` is the single initialization step: it takes the
//! environment inputs, runs the fallback chain once and hands back a value
//! that consumers borrow for the rest of the process.

use std::fmt;

use tracing::debug;

use crate::builtins::built_in_presets;
use crate::env::PresetEnv;
use crate::resolver::{default_index, parse_override, resolve_presets};
use crate::schema::Preset;
use crate::{Error, Result};

/// Where the effective preset list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetSource {
    /// Compiled-in presets
    BuiltIn,
    /// Decoded from the override variable
    Environment,
}

impl fmt::Display for PresetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetSource::BuiltIn => write!(f, "built-in"),
            PresetSource::Environment => write!(f, "environment"),
        }
    }
}

/// Effective preset list plus the chosen default.
///
/// The list is never empty, so [`PresetCatalog::default_preset`] always
/// returns a preset.
///
/// # Example
///
/// ```
/// use qr_presets::{PresetCatalog, PresetEnv, PresetSource};
///
/// let catalog = PresetCatalog::resolve(&PresetEnv::new());
/// assert_eq!(catalog.source(), PresetSource::BuiltIn);
/// assert_eq!(catalog.default_preset().name, "Plain");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
    default_index: usize,
    source: PresetSource,
}

impl PresetCatalog {
    /// Resolve the effective list and default from the given inputs
    pub fn resolve(env: &PresetEnv) -> Self {
        let override_presets = parse_override(env.presets_json.as_deref());
        let source = match override_presets {
            Some(_) => PresetSource::Environment,
            None => PresetSource::BuiltIn,
        };

        let presets = resolve_presets(override_presets, built_in_presets());
        // Both sources are non-empty: built-ins hold "Plain" and empty
        // overrides are rejected during decoding.
        let default_index = default_index(&presets, env.default_name.as_deref()).unwrap_or(0);

        debug!(
            %source,
            count = presets.len(),
            default = %presets[default_index].name,
            "Resolved QR code presets"
        );

        Self {
            presets,
            default_index,
            source,
        }
    }

    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::resolve(&PresetEnv::from_env())
    }

    /// Presets in display order
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn default_preset(&self) -> &Preset {
        &self.presets[self.default_index]
    }

    pub fn source(&self) -> PresetSource {
        self.source
    }

    /// Preset names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(Preset::name)
    }

    /// Look up a preset by exact name
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Like [`find`](Self::find), but reports a missing preset as an error
    pub fn get(&self, name: &str) -> Result<&Preset> {
        self.find(name).ok_or_else(|| Error::PresetNotFound {
            name: name.to_string(),
        })
    }

    /// Whether `preset` is the entry chosen as default
    pub fn is_default(&self, preset: &Preset) -> bool {
        std::ptr::eq(preset, self.default_preset())
    }
}
