use clap::Parser;
use starlines_cli::{command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let Cli { command } = Cli::parse();
    command::handle_command(command)
}
