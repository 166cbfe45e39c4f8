//! Preset schema - a named bundle of rendering options plus cosmetic style
//!
//! A preset serializes as one flat camelCase object. The drawing library's
//! `shape`, `qrOptions`, `nodeCanvas` and `jsdom` options are supplied at
//! render time and are not part of a preset; they are ignored on input.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "Dark",
//!   "style": { "borderRadius": "12px", "background": "#111827" },
//!   "type": "svg",
//!   "width": 600,
//!   "height": 600,
//!   "margin": 0,
//!   "data": "https://example.com",
//!   "image": "",
//!   "imageOptions": { "margin": 0 },
//!   "dotsOptions": { "type": "rounded", "color": "#f9fafb" },
//!   "cornersSquareOptions": { "type": "extra-rounded", "color": "#f9fafb" },
//!   "cornersDotOptions": { "type": "dot", "color": "#f9fafb" },
//!   "backgroundOptions": { "color": "#111827" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::options::{
    BackgroundOptions, CornersDotOptions, CornersSquareOptions, DotsOptions, DrawType,
    ImageOptions,
};

/// Cosmetic attributes applied around the rendered code
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomStyle {
    /// CSS length, e.g. "24px"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    /// CSS colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Full set of rendering options carried by a preset.
///
/// Every top-level field is required; only the nested option blocks have
/// optional members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetOptions {
    #[serde(rename = "type")]
    pub draw_type: DrawType,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    /// Content encoded into the code
    pub data: String,
    /// Centre image URL or data URI; empty for none
    pub image: String,
    pub image_options: ImageOptions,
    pub dots_options: DotsOptions,
    pub corners_square_options: CornersSquareOptions,
    pub corners_dot_options: CornersDotOptions,
    pub background_options: BackgroundOptions,
}

/// A named, fully specified preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub style: CustomStyle,
    #[serde(flatten)]
    pub options: PresetOptions,
}

/// Options shared by every compiled-in preset before its bundle is applied
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultOptions {
    pub draw_type: DrawType,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub border_radius: String,
    pub image_options: ImageOptions,
    pub background_options: BackgroundOptions,
}

/// Content half of a compiled-in preset.
///
/// `image_options` and `background_options` replace the defaults wholesale
/// when set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleProps {
    pub data: String,
    pub image: String,
    pub dots_options: DotsOptions,
    pub corners_square_options: CornersSquareOptions,
    pub corners_dot_options: CornersDotOptions,
    pub image_options: Option<ImageOptions>,
    pub background_options: Option<BackgroundOptions>,
}

/// A compiled-in style/content bundle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresetBundle {
    pub props: BundleProps,
    pub style: CustomStyle,
}

impl Preset {
    /// Assemble a preset from the shared defaults and a named bundle.
    ///
    /// Bundle values win over defaults wherever both supply a field.
    pub fn from_bundle(
        name: impl Into<String>,
        defaults: DefaultOptions,
        bundle: PresetBundle,
    ) -> Self {
        let PresetBundle { props, style } = bundle;

        Self {
            name: name.into(),
            style,
            options: PresetOptions {
                draw_type: defaults.draw_type,
                width: defaults.width,
                height: defaults.height,
                margin: defaults.margin,
                border_radius: Some(defaults.border_radius),
                data: props.data,
                image: props.image,
                image_options: props.image_options.unwrap_or(defaults.image_options),
                dots_options: props.dots_options,
                corners_square_options: props.corners_square_options,
                corners_dot_options: props.corners_dot_options,
                background_options: props
                    .background_options
                    .unwrap_or(defaults.background_options),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
