mod command;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use katsuyo::{Config, Dirs};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Load configuration from the given path instead of the default
    /// location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a verb.
    Conjugate(command::conjugate::ConjugateArgs),
    /// Check an answer against an expected form.
    Check(command::check::CheckArgs),
    /// List or search known verbs.
    Verbs(command::verbs::VerbsArgs),
    /// List available tenses.
    Tenses(command::tenses::TensesArgs),
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::parse();
    run(&args)
}

impl Args {
    /// Load the configuration, only done for commands which use it.
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_path(path),
            None => Config::load(&Dirs::open()?),
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    match &args.command {
        Command::Conjugate(command_args) => {
            command::conjugate::run(&args.load_config()?, command_args)?
        }
        Command::Check(command_args) => return command::check::run(command_args),
        Command::Verbs(command_args) => command::verbs::run(&args.load_config()?, command_args)?,
        Command::Tenses(command_args) => command::tenses::run(command_args)?,
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::process::ExitCode;

    use clap::Parser;

    use super::{run, Args};

    const MISSING: &str = "/nonexistent/katsuyo/config.toml";

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn config_is_only_loaded_when_used() {
        let check = parse(&["katsuyo", "--config", MISSING, "check", "来ます", "きます"]);
        assert_eq!(run(&check).unwrap(), ExitCode::SUCCESS);

        let tenses = parse(&["katsuyo", "tenses", "--config", MISSING]);
        assert_eq!(run(&tenses).unwrap(), ExitCode::SUCCESS);

        let conjugate = parse(&["katsuyo", "--config", MISSING, "conjugate", "食べる"]);
        assert!(run(&conjugate).is_err());

        let verbs = parse(&["katsuyo", "verbs", "--config", MISSING]);
        assert!(run(&verbs).is_err());
    }
}
