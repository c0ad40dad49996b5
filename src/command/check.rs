use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use katsuyo::answer::{self, Relaxation};
use katsuyo::kana;
use serde::Serialize;

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct CheckArgs {
    /// The expected form.
    expected: String,
    /// The answer to check.
    actual: String,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long = "format")]
    output_format: Option<String>,
}

#[derive(Serialize)]
struct Verdict<'a> {
    expected: &'a str,
    actual: &'a str,
    correct: bool,
    relaxation: Option<Relaxation>,
}

pub(crate) fn run(args: &CheckArgs) -> Result<ExitCode> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;
    let relaxation = answer::check(&args.expected, &args.actual);

    let o = std::io::stdout();
    let mut o = o.lock();

    match format {
        OutputFormat::Rich => match relaxation {
            Some(relaxation) => writeln!(o, "Correct ({})", relaxation.describe())?,
            None => {
                writeln!(o, "Incorrect")?;

                if kana::contains_kanji(&args.expected) {
                    let reading = answer::to_hiragana(&args.expected);
                    writeln!(o, "Expected: {} ({reading})", args.expected)?;
                } else {
                    writeln!(o, "Expected: {}", args.expected)?;
                }
            }
        },
        OutputFormat::Json | OutputFormat::JsonPretty => super::print_json(
            &mut o,
            &Verdict {
                expected: &args.expected,
                actual: &args.actual,
                correct: relaxation.is_some(),
                relaxation,
            },
            matches!(format, OutputFormat::JsonPretty),
        )?,
    }

    o.flush()?;

    Ok(if relaxation.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
