//! Preset resolution with a fallback chain
//!
//! The effective list is either the environment override, when it decodes,
//! or the built-in list. The two are never merged. The default preset is
//! looked up by exact name and falls back to the first entry.

use tracing::{debug, error, warn};

use crate::env::PRESETS_VAR;
use crate::schema::Preset;
use crate::{Error, Result};

/// Decode an override value into a preset list.
///
/// Any JSON that does not decode into a non-empty array of presets is
/// rejected, including syntactically valid JSON of the wrong shape.
pub fn decode_override(json: &str) -> Result<Vec<Preset>> {
    let presets: Vec<Preset> =
        serde_json::from_str(json).map_err(|source| Error::InvalidOverride { source })?;

    if presets.is_empty() {
        return Err(Error::EmptyOverride);
    }

    Ok(presets)
}

/// Parse the raw override value, if any.
///
/// Returns `None` when no override is configured or when it fails to
/// decode. A decode failure is logged once and otherwise absorbed.
pub fn parse_override(raw: Option<&str>) -> Option<Vec<Preset>> {
    let raw = raw.filter(|value| !value.is_empty())?;

    match decode_override(raw) {
        Ok(presets) => {
            debug!(count = presets.len(), "Using presets from {PRESETS_VAR}");
            Some(presets)
        }
        Err(err) => {
            error!(error = %err, "Failed to parse {PRESETS_VAR}");
            None
        }
    }
}

/// Pick the effective list: the override when present, else the built-ins
pub fn resolve_presets(
    override_presets: Option<Vec<Preset>>,
    built_in: Vec<Preset>,
) -> Vec<Preset> {
    override_presets.unwrap_or(built_in)
}

/// Select the default preset from the effective list.
///
/// Matching is exact and case-sensitive. An unmatched name falls back to
/// the first entry. Returns `None` only for an empty list.
pub fn resolve_default<'a>(
    presets: &'a [Preset],
    default_name: Option<&str>,
) -> Option<&'a Preset> {
    default_index(presets, default_name).map(|index| &presets[index])
}

pub(crate) fn default_index(presets: &[Preset], default_name: Option<&str>) -> Option<usize> {
    if presets.is_empty() {
        return None;
    }

    let Some(name) = default_name else {
        return Some(0);
    };

    match presets.iter().position(|preset| preset.name == name) {
        Some(index) => Some(index),
        None => {
            warn!(
                requested = name,
                fallback = %presets[0].name,
                "Default preset not found, using first preset"
            );
            Some(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{built_in_presets, plain_preset};

    fn named(name: &str) -> Preset {
        let mut preset = plain_preset();
        preset.name = name.to_string();
        preset
    }

    #[test]
    fn test_parse_override_absent() {
        assert!(parse_override(None).is_none());
        assert!(parse_override(Some("")).is_none());
    }

    #[test]
    fn test_parse_override_invalid_json() {
        assert!(parse_override(Some("{invalid json")).is_none());
    }

    #[test]
    fn test_decode_override_errors() {
        let err = decode_override("{invalid json").unwrap_err();
        assert!(matches!(err, Error::InvalidOverride { .. }));

        let err = decode_override(r#"{"name": "NotAnArray"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidOverride { .. }));

        let err = decode_override("[]").unwrap_err();
        assert!(matches!(err, Error::EmptyOverride));
    }

    #[test]
    fn test_decode_override_round_trips_built_ins() {
        let json = serde_json::to_string(&built_in_presets()).unwrap();
        let decoded = decode_override(&json).unwrap();
        assert_eq!(decoded, built_in_presets());
    }

    #[test]
    fn test_resolve_presets_prefers_override() {
        let resolved = resolve_presets(Some(vec![named("Dark")]), built_in_presets());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Dark");

        let resolved = resolve_presets(None, built_in_presets());
        assert_eq!(resolved, built_in_presets());
    }

    #[test]
    fn test_resolve_default() {
        let presets = vec![named("A"), named("B")];

        assert_eq!(resolve_default(&presets, None).unwrap().name, "A");
        assert_eq!(resolve_default(&presets, Some("B")).unwrap().name, "B");
        assert_eq!(resolve_default(&presets, Some("b")).unwrap().name, "A");
        assert_eq!(resolve_default(&presets, Some("Missing")).unwrap().name, "A");
        assert!(resolve_default(&[], Some("A")).is_none());
    }

    #[test]
    fn test_resolve_default_takes_first_duplicate() {
        let mut second = named("Twin");
        second.options.width = 1;
        let presets = vec![named("Other"), named("Twin"), second];

        assert_eq!(default_index(&presets, Some("Twin")), Some(1));
    }
}
