use std::io::{self, Write};

use anyhow::Context as _;
use blocktris_engine::{Engine, GameSummary, PieceSeed};
use blocktris_runtime::Runtime;
use log::info;

use crate::{command::play::app::PlayApp, config::Config};

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence (32 hex digits); random if omitted
    #[arg(long)]
    seed: Option<PieceSeed>,
    /// Hide the next-piece preview
    #[arg(long)]
    no_preview: bool,
    /// Show where the falling piece will land
    #[arg(long)]
    ghost: bool,
    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

impl PlayArg {
    /// Applies command-line overrides on top of the file configuration.
    fn apply_to(&self, config: &mut Config) {
        if self.no_preview {
            config.preview = false;
        }
        if self.ghost {
            config.ghost = true;
        }
    }
}

pub(crate) fn run(config: &Config, arg: &PlayArg) -> anyhow::Result<()> {
    let mut config = config.clone();
    arg.apply_to(&mut config);

    let engine = match arg.seed {
        Some(seed) => Engine::with_seed(config.engine_config(), seed),
        None => Engine::new(config.engine_config()),
    };
    if let Some(seed) = engine.seed() {
        info!("starting game with seed {seed}");
    }

    let mut app = PlayApp::new(engine, &config);
    Runtime::new()
        .run(&mut app)
        .context("Failed to run the terminal UI")?;

    let summary = app.summary();
    info!("session ended: {summary}");
    write_summary(&mut io::stdout().lock(), &summary, arg.json)
}

fn write_summary<W>(out: &mut W, summary: &GameSummary, json: bool) -> anyhow::Result<()>
where
    W: Write,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, summary).context("Failed to write JSON summary")?;
        writeln!(out).context("Failed to write summary")?;
    } else {
        writeln!(
            out,
            "Game over: score {}, level {}, lines {}",
            summary.score, summary.level, summary.lines
        )
        .context("Failed to write summary")?;
        if let Some(seed) = summary.seed {
            writeln!(out, "Seed: {seed}").context("Failed to write summary")?;
        }
    }
    out.flush().context("Failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use blocktris_engine::{Command, EngineConfig};
    use clap::Parser as _;

    use super::*;
    use crate::command::CommandArgs;

    fn summary() -> GameSummary {
        let mut engine =
            Engine::with_seed(EngineConfig::default(), PieceSeed::from_bytes([0x11; 16]));
        engine.apply(Command::HardDrop);
        engine.summary()
    }

    #[test]
    fn test_plain_summary() {
        let mut out = vec![];
        write_summary(&mut out, &summary(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Game over: score 0, level 1, lines 0\nSeed: 11111111111111111111111111111111\n"
        );
    }

    #[test]
    fn test_json_summary() {
        let mut out = vec![];
        write_summary(&mut out, &summary(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["pieces"], 1);
        assert_eq!(value["seed"], "11111111111111111111111111111111");
    }

    #[test]
    fn test_flags_override_config() {
        let args =
            CommandArgs::try_parse_from(["blocktris", "play", "--no-preview", "--ghost"]).unwrap();
        let Some(crate::command::Mode::Play(arg)) = args.mode else {
            panic!("expected play");
        };
        let mut config = Config::default();
        arg.apply_to(&mut config);
        assert!(!config.preview);
        assert!(config.ghost);
        assert!(!arg.json);
    }

    #[test]
    fn test_seed_flag() {
        let args = CommandArgs::try_parse_from([
            "blocktris",
            "play",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        let Some(crate::command::Mode::Play(arg)) = args.mode else {
            panic!("expected play");
        };
        assert_eq!(arg.seed, "000102030405060708090a0b0c0d0e0f".parse().ok());

        let bad_seed = CommandArgs::try_parse_from(["blocktris", "play", "--seed", "xyz"]);
        assert!(bad_seed.is_err());
    }
}
