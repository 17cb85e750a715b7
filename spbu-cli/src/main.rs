//! SPBU CLI - Command line tool for the fuel station operations dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spbu-cli",
    version,
    about = "Fuel station (SPBU) monitoring toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: spbu_cmd::Options,

    #[command(subcommand)]
    command: spbu_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("seed: {:?}, format: {:?}", cli.options.seed, cli.options.format);
    spbu_cmd::run(cli.options, cli.command)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filter_arguments() {
        let cli = Cli::try_parse_from(["spbu-cli", "--format", "json", "filter", "-q", "spbu", "-s", "offline"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn rejects_unknown_status() {
        let cli = Cli::try_parse_from(["spbu-cli", "filter", "--status", "asleep"]);
        assert!(cli.is_err());
        let cli = Cli::try_parse_from(["spbu-cli", "colors", "asleep"]);
        assert!(cli.is_err());
    }
}
