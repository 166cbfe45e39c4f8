//! Show a single preset

use qr_presets::PresetCatalog;

use crate::error::Result;

/// Run the show command
pub fn run_show(catalog: &PresetCatalog, name: &str) -> Result<()> {
    let preset = catalog.get(name)?;
    println!("{}", serde_json::to_string_pretty(preset)?);
    Ok(())
}
