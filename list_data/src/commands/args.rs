use crate::config::Config;
use crate::error::{ListDataError, Result};
use crate::lister::TraversalMode;
use clap::{App, Arg, ArgGroup, ArgMatches, SubCommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct Args {
    pub root_var: String,
    pub traversal: TraversalMode,
    pub max_depth: Option<usize>,
    pub output_mode: OutputMode,
    pub config_path: PathBuf,
    pub verbose: bool,
    pub no_color: bool,
    pub command: Option<Command>,
}

pub enum Command {
    InitConfig,
    Config(ConfigAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    View,
    Set(String, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json { pretty: bool },
    Ndjson,
    Csv,
}

impl Args {
    pub fn get_cli() -> App<'static> {
        App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::with_name("json")
                    .long("json")
                    .help("Print entries as a JSON array"),
            )
            .arg(
                Arg::with_name("pretty")
                    .long("pretty")
                    .conflicts_with_all(&["ndjson", "csv"])
                    .help("Indent JSON output"),
            )
            .arg(
                Arg::with_name("ndjson")
                    .long("ndjson")
                    .help("Print one JSON string per line"),
            )
            .arg(
                Arg::with_name("csv")
                    .long("csv")
                    .help("Print entries as CSV with a `name` header"),
            )
            .group(ArgGroup::with_name("format").args(&["json", "ndjson", "csv"]))
            .arg(
                Arg::with_name("joined")
                    .long("joined")
                    .help("Descend into parent/child paths instead of bare names (fixed traversal)"),
            )
            .arg(
                Arg::with_name("root-var")
                    .long("root-var")
                    .takes_value(true)
                    .value_name("NAME")
                    .help("Environment variable holding the directory to list [default: PWD]"),
            )
            .arg(
                Arg::with_name("max-depth")
                    .long("max-depth")
                    .takes_value(true)
                    .value_name("N")
                    .help("Deepest level enumerated, the root being 0"),
            )
            .arg(
                Arg::with_name("config-file")
                    .long("config")
                    .takes_value(true)
                    .value_name("PATH")
                    .global(true)
                    .help("Use this config file instead of ~/.config/list_data/config.toml"),
            )
            .arg(
                Arg::with_name("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Report the resolved root and entry count on stderr"),
            )
            .arg(
                Arg::with_name("no-color")
                    .long("no-color")
                    .global(true)
                    .help("Disable coloured diagnostics"),
            )
            .subcommand(SubCommand::with_name("init").about("Write the default config file"))
            .subcommand(
                SubCommand::with_name("config")
                    .about("View or modify the configuration")
                    .arg(
                        Arg::with_name("set")
                            .long("set")
                            .takes_value(true)
                            .number_of_values(2)
                            .value_names(&["KEY", "VALUE"])
                            .help("Set a configuration value"),
                    ),
            )
    }

    /// Config file named on the command line, or the default location.
    pub fn config_path(matches: &ArgMatches) -> PathBuf {
        matches
            .value_of("config-file")
            .map(PathBuf::from)
            .unwrap_or_else(Config::get_config_path)
    }

    pub fn try_matches_from<I, T>(itr: I) -> Result<ArgMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::get_cli()
            .try_get_matches_from(itr)
            .map_err(|e| ListDataError::Parse(e.to_string()))
    }

    pub fn from_matches(matches: &ArgMatches, config: &Config) -> Result<Self> {
        let command = match matches.subcommand() {
            Some(("init", _)) => Some(Command::InitConfig),
            Some(("config", sub)) => {
                let action = match sub.values_of("set") {
                    Some(values) => {
                        let values: Vec<&str> = values.collect();
                        ConfigAction::Set(values[0].to_string(), values[1].to_string())
                    }
                    None => ConfigAction::View,
                };
                Some(Command::Config(action))
            }
            _ => None,
        };

        let max_depth = match matches.value_of("max-depth") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                ListDataError::Parse(format!(
                    "Invalid --max-depth value '{}': expected a non-negative integer",
                    raw
                ))
            })?),
            None => config.max_depth,
        };

        Ok(Args {
            root_var: matches
                .value_of("root-var")
                .unwrap_or(&config.root_var)
                .to_string(),
            traversal: if matches.is_present("joined") {
                TraversalMode::Joined
            } else {
                config.traversal
            },
            max_depth,
            output_mode: {
                let pretty = matches.is_present("pretty");
                if matches.is_present("json") {
                    OutputMode::Json { pretty }
                } else if matches.is_present("ndjson") {
                    OutputMode::Ndjson
                } else if matches.is_present("csv") {
                    OutputMode::Csv
                } else {
                    config.default_format.into_mode(pretty)
                }
            },
            config_path: Self::config_path(matches),
            verbose: matches.is_present("verbose"),
            no_color: matches.is_present("no-color"),
            command,
        })
    }
}
