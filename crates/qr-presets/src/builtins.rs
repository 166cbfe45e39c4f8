//! Compiled-in presets
//!
//! The built-in list always holds at least the "Plain" preset, so the
//! resolver has a non-empty fallback.

use crate::schema::{
    BackgroundOptions, BundleProps, CornerDotType, CornerSquareType, CornersDotOptions,
    CornersSquareOptions, CustomStyle, DefaultOptions, DotType, DotsOptions, DrawType,
    ImageOptions, Preset, PresetBundle,
};

/// Name of the base preset
pub const PLAIN_PRESET_NAME: &str = "Plain";

/// Options every compiled-in preset starts from
pub fn default_preset_options() -> DefaultOptions {
    DefaultOptions {
        draw_type: DrawType::Svg,
        width: 600,
        height: 600,
        margin: 0,
        border_radius: "0px".to_string(),
        image_options: ImageOptions {
            margin: Some(0),
            ..Default::default()
        },
        background_options: BackgroundOptions {
            color: Some("transparent".to_string()),
            ..Default::default()
        },
    }
}

/// The "plain" bundle: square black modules on a white card
pub fn plain_bundle() -> PresetBundle {
    let black = || Some("#000000".to_string());

    PresetBundle {
        props: BundleProps {
            data: "https://example.com".to_string(),
            image: String::new(),
            dots_options: DotsOptions {
                dot_type: Some(DotType::Square),
                color: black(),
                ..Default::default()
            },
            corners_square_options: CornersSquareOptions {
                square_type: Some(CornerSquareType::Square),
                color: black(),
                ..Default::default()
            },
            corners_dot_options: CornersDotOptions {
                dot_type: Some(CornerDotType::Square),
                color: black(),
                ..Default::default()
            },
            image_options: None,
            background_options: None,
        },
        style: CustomStyle {
            border_radius: Some("0px".to_string()),
            background: Some("#ffffff".to_string()),
        },
    }
}

pub fn plain_preset() -> Preset {
    Preset::from_bundle(PLAIN_PRESET_NAME, default_preset_options(), plain_bundle())
}

/// Presets shipped with the crate, in display order
pub fn built_in_presets() -> Vec<Preset> {
    vec![plain_preset()]
}
