use anyhow::{anyhow, Result};

use crate::runtime::SessionConfig;

/// Command-line overrides applied on top of the environment config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<u64>,
    pub no_gravity: bool,
    pub help: bool,
}

pub const USAGE: &str = "usage: blockfall [--seed N] [--no-gravity]

Reads one command per line on stdin (left, right, down, cw, ccw, hold, drop,
restart or {\"type\":\"command\",\"action\":\"moveLeft\"}) and writes JSON
events to stdout until stdin closes. Logging goes to stderr (RUST_LOG).";

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                out.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--no-gravity" => out.no_gravity = true,
            "-h" | "--help" => out.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(out)
}

impl CliArgs {
    pub fn apply(&self, config: &mut SessionConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_gravity {
            config.gravity_enabled = false;
        }
    }
}
