use anyhow::Result;
use clap::Parser;

use beacon_bluff::cli::Cli;
use beacon_bluff::{emit_beacon, RawSocketInjector};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    emit_beacon(&RawSocketInjector, &cli.interface, &cli.ssid_bytes(), &cli.mac)?;
    Ok(())
}
