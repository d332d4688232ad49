use clap::Parser;

use showcase::cli::{AppConfig, Cli};
use showcase::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    showcase::logging::init_tracing();

    let config = AppConfig::from(&cli);
    runtime::run(config)?;
    Ok(())
}
