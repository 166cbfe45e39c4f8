//! Error types for qr-presets

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid preset override: {source}")]
    InvalidOverride {
        #[source]
        source: serde_json::Error,
    },

    #[error("Preset override contains no presets")]
    EmptyOverride,

    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },
}
