use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use katsuyo::answer;
use katsuyo::kana;
use katsuyo::verbs;
use katsuyo::{Config, FormKey, Formality, Inflections, Polarity, Tense, Verb};
use serde::Serialize;

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct ConjugateArgs {
    /// The verb to conjugate, by dictionary form or kana reading.
    verb: String,
    /// Only show the given tense, like `past` or `teForm`. See the `tenses`
    /// command for available tenses.
    #[arg(long)]
    tense: Option<String>,
    /// Show negative forms.
    #[arg(long)]
    negative: bool,
    /// Show polite forms.
    #[arg(long)]
    polite: bool,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long = "format")]
    output_format: Option<String>,
}

#[derive(Serialize)]
struct Single<'a> {
    dictionary: &'a str,
    key: FormKey,
    form: &'a str,
}

pub(crate) fn run(config: &Config, args: &ConjugateArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;

    let verbs = config.verbs();
    let verb = verbs::lookup(&verbs, &args.verb)
        .with_context(|| anyhow!("Unknown verb `{}`", args.verb))?;

    let o = std::io::stdout();
    let mut o = o.lock();

    let Some(tense) = &args.tense else {
        let polarity = args.negative.then_some(Polarity::Negative);
        let formality = args.polite.then_some(Formality::Polite);

        let keys = config.keys().filter(|key| {
            polarity.map_or(true, |p| key.polarity == p)
                && formality.map_or(true, |f| key.formality == f)
        });

        let inflections = Inflections::with_keys(verb, keys);

        match format {
            OutputFormat::Rich => print_table(&mut o, verb, &inflections)?,
            OutputFormat::Json | OutputFormat::JsonPretty => super::print_json(
                &mut o,
                &inflections,
                matches!(format, OutputFormat::JsonPretty),
            )?,
        }

        return Ok(());
    };

    let tense = tense.parse::<Tense>()?;

    let polarity = if args.negative {
        Polarity::Negative
    } else {
        Polarity::Affirmative
    };

    let formality = if args.polite {
        Formality::Polite
    } else {
        Formality::Plain
    };

    let key = FormKey::new(tense, polarity, formality);
    let form = verb.conjugate(tense, polarity, formality);

    match format {
        OutputFormat::Rich => writeln!(o, "{}", with_reading(&form))?,
        OutputFormat::Json | OutputFormat::JsonPretty => super::print_json(
            &mut o,
            &Single {
                dictionary: verb.dictionary(),
                key,
                form: &form,
            },
            matches!(format, OutputFormat::JsonPretty),
        )?,
    }

    Ok(())
}

fn print_table<O>(o: &mut O, verb: &Verb, inflections: &Inflections) -> Result<()>
where
    O: ?Sized + Write,
{
    writeln!(o, "{verb} [{}] - {}", verb.record_class(), verb.meaning())?;

    let mut current = None;

    for (key, form) in inflections.iter() {
        if current != Some(key.tense) {
            writeln!(o, "  {} ({}):", key.tense, key.tense.describe())?;
            current = Some(key.tense);
        }

        writeln!(
            o,
            "  - {} {}: {}",
            key.polarity,
            key.formality,
            with_reading(form)
        )?;
    }

    o.flush()?;
    Ok(())
}

/// Format a form, followed by its kana rendering if it contains kanji.
fn with_reading(form: &str) -> String {
    if kana::contains_kanji(form) {
        format!("{form} ({})", answer::to_hiragana(form))
    } else {
        form.to_owned()
    }
}
