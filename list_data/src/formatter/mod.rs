use crate::commands::args::OutputMode;
use crate::error::{ConfigErrorKind, ListDataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format as named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Ndjson,
    Csv,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 4] = ["human", "json", "ndjson", "csv"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Ndjson => "ndjson",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn into_mode(self, pretty: bool) -> OutputMode {
        match self {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json { pretty },
            OutputFormat::Ndjson => OutputMode::Ndjson,
            OutputFormat::Csv => OutputMode::Csv,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ListDataError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "ndjson" => Ok(OutputFormat::Ndjson),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ListDataError::Config(ConfigErrorKind::InvalidValue(
                "default_format".to_string(),
                format!(
                    "Invalid format value: {}. Must be one of: {}",
                    other,
                    Self::VALUES.join(", ")
                ),
            ))),
        }
    }
}

pub fn write_entries<W: Write>(out: &mut W, entries: &[String], mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Human => {
            for entry in entries {
                writeln!(out, "{}", entry)?;
            }
        }
        OutputMode::Json { pretty } => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, entries)?;
            } else {
                serde_json::to_writer(&mut *out, entries)?;
            }
            writeln!(out)?;
        }
        OutputMode::Ndjson => {
            for entry in entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
        OutputMode::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["name"])?;
            for entry in entries {
                writer.write_record([entry])?;
            }
            writer.flush()?;
        }
    }

    out.flush()?;
    Ok(())
}
