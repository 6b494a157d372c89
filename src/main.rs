use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use globeshape::{
    default_config_path, handles, init_logging, replay, EditorConfig, ReplayScript, Shape,
    LONG_VERSION,
};

#[derive(Parser)]
#[command(name = "globeshape", version, long_version = LONG_VERSION)]
#[command(about = "Replay and inspect shape edits on a globe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a pointer event script and print the edited shape as JSON
    Replay {
        script: PathBuf,

        /// Editor configuration (.json or .toml); defaults to the user config if present
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the control points of a shape
    Handles { shape: PathBuf },
    /// Write the default configuration (.json or .toml)
    Config { path: PathBuf },
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    if let Some(path) = path {
        return EditorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Ok(path) if path.exists() => {
            tracing::info!("Using config {}", path.display());
            EditorConfig::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        _ => Ok(EditorConfig::default()),
    }
}

fn write_json(value: &impl serde::Serialize, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            config,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            let script = ReplayScript::load(&script)?;
            let result = replay(script, config)?;
            write_json(&result, output.as_deref())
        }
        Command::Handles { shape: path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let shape: Shape = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse shape {}", path.display()))?;
            let config = load_config(None)?;
            write_json(&handles(&config.globe.ellipsoid(), &shape), None)
        }
        Command::Config { path } => {
            EditorConfig::default()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}
