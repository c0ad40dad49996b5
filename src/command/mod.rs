pub(crate) mod check;
pub(crate) mod conjugate;
pub(crate) mod tenses;
pub(crate) mod verbs;

use std::io::Write;

use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormat {
    Rich,
    Json,
    JsonPretty,
}

impl OutputFormat {
    /// Parse an output format, defaulting to `rich`.
    pub(crate) fn parse(format: Option<&str>) -> Result<Self> {
        Ok(match format {
            Some("rich") | None => OutputFormat::Rich,
            Some("json") => OutputFormat::Json,
            Some("json-pretty") => OutputFormat::JsonPretty,
            Some(name) => bail!("Unsupported output format: {}", name),
        })
    }
}

/// Write a value as a single JSON document.
pub(crate) fn print_json<O, T>(o: &mut O, value: &T, pretty: bool) -> Result<()>
where
    O: ?Sized + Write,
    T: ?Sized + Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *o, value)?;
    } else {
        serde_json::to_writer(&mut *o, value)?;
    }

    writeln!(o)?;
    Ok(())
}
