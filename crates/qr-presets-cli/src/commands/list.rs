//! List and default commands

use colored::Colorize;
use qr_presets::PresetCatalog;

use crate::error::Result;

/// Run the list command
pub fn run_list(catalog: &PresetCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.presets())?);
        return Ok(());
    }

    println!(
        "{} ({} source)",
        "QR Code Presets".bold(),
        catalog.source().to_string().cyan()
    );
    println!();

    for preset in catalog.presets() {
        let options = &preset.options;
        let marker = if catalog.is_default(preset) { "*" } else { " " };
        println!(
            "{} {:<16} {}x{} {}",
            marker.green().bold(),
            preset.name.green(),
            options.width,
            options.height,
            options.draw_type.to_string().dimmed()
        );
    }

    Ok(())
}

/// Run the default command
pub fn run_default(catalog: &PresetCatalog, json: bool) -> Result<()> {
    let preset = catalog.default_preset();

    if json {
        println!("{}", serde_json::to_string_pretty(preset)?);
    } else {
        println!("{}", preset.name);
    }

    Ok(())
}
