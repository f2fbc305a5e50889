use anyhow::Result;
use billypad::config::{Args, Config};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = Config::from_args(args)?;
    billypad::shell::run(config)
}
