//! Schema definitions for QR code presets
//!
//! Presets travel as JSON: a list of flat camelCase objects, each carrying
//! a name, a cosmetic style block and the drawing library's options.
//!
//! # Decoding rules
//!
//! - Unknown keys are dropped, at the top level and inside every nested
//!   option block (`dotsOptions.foo` decodes and disappears on output).
//! - Known keys must hold a valid value. An unrecognised enum value such as
//!   `"type": "hexagon"` fails the decode, which rejects the whole override.

pub mod options;
pub mod preset;

pub use options::{
    BackgroundOptions, ColorStop, CornerDotType, CornerSquareType, CornersDotOptions,
    CornersSquareOptions, DotType, DotsOptions, DrawType, Gradient, GradientType, ImageOptions,
};
pub use preset::{BundleProps, CustomStyle, DefaultOptions, Preset, PresetBundle, PresetOptions};
