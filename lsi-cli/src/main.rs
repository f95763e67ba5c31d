//! LSI CLI - inspect and validate the dashboard's data files from a terminal.

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "lsi-cli",
    version,
    about = "Landsat surface index data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    commands::run(cli.command)
}
