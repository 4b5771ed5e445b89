use clap::Subcommand;

pub mod hello;
pub mod triangle;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a left-aligned triangle of asterisks.
    Triangle(triangle::TriangleArgs),
    /// Print "Hello, World!".
    Hello,
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Triangle(args) => triangle::handle_command(args),
        Command::Hello => hello::handle_command(),
    }
}
