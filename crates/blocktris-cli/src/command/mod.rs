use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use log::info;

use crate::{config::Config, logging};

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    /// Configuration file [default: <config dir>/blocktris/config.toml]
    #[arg(long, global = true, env = "BLOCKTRIS_CONFIG")]
    config: Option<PathBuf>,
    /// Log file [default: <data dir>/blocktris/blocktris.log]
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game (default)
    Play(PlayArg),
    /// Print the effective configuration as TOML
    PrintConfig,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let log_path = logging::init(args.log_file.as_deref())?;
    info!("logging to {}", log_path.display());

    let config = Config::load(args.config.as_deref())?;
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&config, &arg)?,
        Mode::PrintConfig => {
            let text = config.to_toml()?;
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write configuration")?;
        }
    }
    Ok(())
}
