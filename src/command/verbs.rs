use std::io::Write;

use anyhow::Result;
use clap::Parser;
use katsuyo::verb::RecordClass;
use katsuyo::{verbs, Config};

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct VerbsArgs {
    /// Substring to search for in dictionary forms, readings and meanings.
    query: Option<String>,
    /// Only list verbs of the given class. Available options are: ichidan,
    /// godan, irregular.
    #[arg(long)]
    class: Option<String>,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long = "format")]
    output_format: Option<String>,
}

pub(crate) fn run(config: &Config, args: &VerbsArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;

    let class = match &args.class {
        Some(class) => Some(class.parse::<RecordClass>()?),
        None => None,
    };

    let all = config.verbs();
    let found = verbs::search(&all, args.query.as_deref().unwrap_or_default(), class)
        .collect::<Vec<_>>();

    let o = std::io::stdout();
    let mut o = o.lock();

    match format {
        OutputFormat::Rich => {
            for verb in &found {
                writeln!(
                    o,
                    "{verb} [{}] - {}",
                    verb.record_class(),
                    verb.meaning()
                )?;
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            super::print_json(&mut o, &found, matches!(format, OutputFormat::JsonPretty))?
        }
    }

    o.flush()?;
    Ok(())
}
