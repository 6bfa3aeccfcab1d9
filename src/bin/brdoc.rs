use anyhow::Result;
use std::process::ExitCode;

use brdoc::cli;
use brdoc::config::Config;

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match &config.config_path {
        Some(path) => log::debug!("loaded config from {}", path.display()),
        None => log::debug!("no config file, using defaults"),
    }

    let outcome = cli::run(&config);
    println!("{}", outcome.render(config.format)?);

    Ok(ExitCode::from(outcome.exit_code()))
}
