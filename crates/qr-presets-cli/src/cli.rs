//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use qr_presets::PresetEnv;

/// Inspect the QR code presets resolved from the environment
#[derive(Parser, Debug)]
#[command(name = "qr-presets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON array of presets replacing the built-in list
    #[arg(long, global = true, env = "VITE_QR_CODE_PRESETS", hide_env_values = true)]
    pub presets_json: Option<String>,

    /// Name of the preset selected by default
    #[arg(long, global = true, env = "VITE_DEFAULT_PRESET")]
    pub default_preset: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolver inputs gathered from flags and environment
    pub fn preset_env(&self) -> PresetEnv {
        let mut env = PresetEnv::new();
        if let Some(json) = &self.presets_json {
            env = env.with_presets_json(json.as_str());
        }
        if let Some(name) = &self.default_preset {
            env = env.with_default_name(name.as_str());
        }
        env
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List presets in display order, marking the default
    List {
        /// Output the full preset list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the default preset
    Default {
        /// Output the full preset as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a preset by exact name as JSON
    Show {
        /// Preset name (case-sensitive)
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["qr-presets", "list", "--json"]).unwrap();
        assert_eq!(cli.command, Commands::List { json: true });
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_show_with_flags() {
        let cli = Cli::try_parse_from([
            "qr-presets",
            "show",
            "Dark",
            "--default-preset",
            "Dark",
            "-v",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Show {
                name: "Dark".to_string()
            }
        );
        assert!(cli.verbose);
        assert_eq!(cli.default_preset.as_deref(), Some("Dark"));
    }

    #[test]
    fn test_show_requires_name() {
        assert!(Cli::try_parse_from(["qr-presets", "show"]).is_err());
    }

    #[test]
    fn test_preset_env_from_flags() {
        let cli = Cli {
            verbose: false,
            presets_json: Some("[]".to_string()),
            default_preset: Some(String::new()),
            command: Commands::List { json: false },
        };

        let env = cli.preset_env();
        assert_eq!(env.presets_json.as_deref(), Some("[]"));
        assert!(env.default_name.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
