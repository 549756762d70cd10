use anyhow::Result;
use clap::Parser;
use log::{error, info};

use core_dumped::app;
use core_dumped::cli::{Cli, Mode, Scope};
use core_dumped::commands::{slash, CommandRegistry};
use core_dumped::config::Config;
use core_dumped::registrar::{run_load, DeployScope, RestSink, EXIT_FAILURE};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.env, &cli.config_dir)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Running in {} mode", config.environment);

    let commands = match CommandRegistry::load(slash::all()) {
        Ok(commands) => commands,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    match cli.mode {
        Some(Mode::Load { scope }) => {
            let (application_id, scope) = match deploy_target(&config, scope) {
                Ok(target) => target,
                Err(e) => {
                    error!("{:#}", e);
                    std::process::exit(EXIT_FAILURE);
                }
            };

            let sink = RestSink::new(&config.discord_token, application_id);
            std::process::exit(run_load(&sink, &commands, scope, application_id).await);
        }
        None => app::start(&config, commands).await,
    }
}

fn deploy_target(config: &Config, scope: Scope) -> Result<(u64, DeployScope)> {
    let application_id = config.application_id()?;
    let scope = DeployScope::from_config(scope == Scope::Global, config)?;
    Ok((application_id, scope))
}
