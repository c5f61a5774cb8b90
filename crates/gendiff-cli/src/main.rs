use clap::Parser;

mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    if cli.color {
        colored::control::set_override(true);
    }

    let invocation = cli.invocation().unwrap_or_else(|e| e.exit());
    let output = commands::run_command(&cli, invocation)?;
    println!("{output}");
    Ok(())
}
