use std::io::Write;

use anyhow::Result;
use clap::Parser;
use katsuyo::Tense;
use serde::Serialize;

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct TensesArgs {
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long = "format")]
    output_format: Option<String>,
}

#[derive(Serialize)]
struct Entry {
    tense: Tense,
    describe: &'static str,
    title: &'static str,
}

pub(crate) fn run(args: &TensesArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;

    let o = std::io::stdout();
    let mut o = o.lock();

    match format {
        OutputFormat::Rich => {
            for tense in Tense::ALL {
                writeln!(o, "{} - {} / {}", tense.ident(), tense.describe(), tense.title())?;
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let entries = Tense::ALL.map(|tense| Entry {
                tense,
                describe: tense.describe(),
                title: tense.title(),
            });

            super::print_json(&mut o, &entries, matches!(format, OutputFormat::JsonPretty))?
        }
    }

    o.flush()?;
    Ok(())
}
