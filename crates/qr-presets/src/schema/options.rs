//! Rendering options understood by the QR drawing library.
//!
//! Only the top level of a preset is required; every field inside the
//! nested option blocks may be left out and is omitted again on output.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "type": "svg",
//!   "width": 600,
//!   "height": 600,
//!   "margin": 0,
//!   "data": "https://example.com",
//!   "image": "",
//!   "imageOptions": { "margin": 0 },
//!   "dotsOptions": { "type": "rounded", "color": "#1d4ed8" },
//!   "cornersSquareOptions": { "type": "extra-rounded" },
//!   "cornersDotOptions": { "type": "dot" },
//!   "backgroundOptions": { "color": "transparent" }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output surface the drawing library renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawType {
    #[default]
    Svg,
    Canvas,
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawType::Svg => write!(f, "svg"),
            DrawType::Canvas => write!(f, "canvas"),
        }
    }
}

/// Shape of the data modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotType {
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
    Square,
    ExtraRounded,
}

/// Shape of the three finder-pattern frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerSquareType {
    Dot,
    Square,
    ExtraRounded,
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
}

/// Shape of the three finder-pattern centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerDotType {
    Dot,
    Square,
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
    ExtraRounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    Linear,
    Radial,
}

/// A single stop of a colour gradient; `offset` runs from 0 to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    /// Rotation in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    pub color_stops: Vec<ColorStop>,
}

/// Options for an embedded centre image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_background_dots: Option<bool>,
    /// Fraction of the code covered by the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_as_blob: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotsOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dot_type: Option<DotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_size: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornersSquareOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub square_type: Option<CornerSquareType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornersDotOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dot_type: Option<CornerDotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Corner rounding of the background, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<f64>,
}
