//! Named visual presets for the QR code renderer.
//!
//! This crate provides the compiled-in presets, the environment inputs that
//! can replace them, and the resolver that turns both into an immutable
//! [`PresetCatalog`]:
//!
//! - `VITE_QR_CODE_PRESETS` - JSON array of presets replacing the built-ins
//! - `VITE_DEFAULT_PRESET` - name of the preset selected by default
//!
//! An override that fails to decode is logged and ignored. A default name
//! that matches nothing falls back to the first preset.
//!
//! ```
//! use qr_presets::{PresetCatalog, PresetEnv};
//!
//! let env = PresetEnv::new().with_default_name("Plain");
//! let catalog = PresetCatalog::resolve(&env);
//! assert_eq!(catalog.default_preset().options.width, 600);
//! ```

pub mod builtins;
pub mod catalog;
pub mod env;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod schema;

pub use builtins::{PLAIN_PRESET_NAME, built_in_presets, plain_preset};
pub use catalog::{PresetCatalog, PresetSource};
pub use env::{DEFAULT_PRESET_VAR, PRESETS_VAR, PresetEnv};
pub use error::{Error, Result};
pub use resolver::{decode_override, parse_override, resolve_default, resolve_presets};
pub use schema::{CustomStyle, Preset, PresetOptions};
