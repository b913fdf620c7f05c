mod climod;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use llmkeys::{ConfigLoader, logging, mask_key, utils};
use std::io::{self, Write};
use std::path::PathBuf;

/// llmkeys — inspect the local LLM provider key file
#[derive(Parser, Debug)]
#[command(name = "llmkeys")]
#[command(version)]
#[command(about = "Load and inspect LLM provider API keys from a JSON file", long_about = None)]
pub struct Cli {
    /// Key file (defaults to <config dir>/llmkeys/llm_models.json)
    #[arg(short, long, global = true, env = "LLM_KEYS_PATH")]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: climod::Commands,
}

fn main() -> Result<()> {
    logging::init_tracing();
    run(Cli::parse(), &mut io::stdout())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let path = cli.path.unwrap_or_else(utils::default_config_path);
    let loader = ConfigLoader::new();

    match &cli.command {
        climod::Commands::Show { strict: false } => {
            write_json(out, &loader.load(&path))?;
        }
        climod::Commands::Show { strict: true } => {
            let map = loader
                .load_strict(&path)
                .with_context(|| format!("Could not load {}", path.display()))?;
            write_json(out, &serde_json::Value::Object(map))?;
        }
        climod::Commands::List => {
            let keys = loader.load_keys(&path);
            if keys.is_empty() {
                writeln!(out, "No providers configured in {}", path.display())?;
            }
            for (provider, credential) in keys.iter() {
                match credential.api_key() {
                    Some(key) => writeln!(out, "{}: {}", provider, mask_key(key))?,
                    None => writeln!(out, "{}: (no api_key)", provider)?,
                }
            }
        }
        climod::Commands::Get { provider } => {
            let keys = loader.load_keys(&path);
            let key = keys
                .api_key(provider)
                .ok_or_else(|| anyhow!("No API key for '{}' in {}", provider, path.display()))?;
            writeln!(out, "{}", key)?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
