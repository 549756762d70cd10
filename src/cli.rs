use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_ENVIRONMENT;

#[derive(Debug, Parser)]
#[command(name = "bot", version, about = "Discord bot harness")]
pub struct Cli {
    /// Selects `.env.<env>` and `config.<env>.json`
    #[arg(long, env = "NODE_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Directory holding the env and config files
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Mode {
    /// Upload the slash command schemas and exit
    Load {
        #[arg(value_enum, default_value_t = Scope::Guild)]
        scope: Scope,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Guild,
    Global,
}
