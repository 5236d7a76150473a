use list_data::commands::args::Args;
use list_data::commands::command_handler::handle_command;
use list_data::config::Config;
use list_data::error::{ListDataError, Result};
use list_data::utils::color::{ColorState, Diagnostics};

fn main() {
    let matches = Args::get_cli().get_matches();

    if let Err(e) = run(&matches) {
        let quiet = Diagnostics::new(ColorState::new(matches.is_present("no-color")), false);
        print_error(&quiet, &e);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let config_path = Args::config_path(matches);

    // A broken config must not stop the listing; fall back to defaults.
    let (config, config_error) = match Config::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let args = Args::from_matches(matches, &config)?;
    let diagnostics = Diagnostics::new(ColorState::new(args.no_color), args.verbose);

    if let Some(err) = config_error {
        diagnostics.warn(&format!(
            "Ignoring config at {}: {}",
            config_path.display(),
            err
        ));
    }

    handle_command(&args, &diagnostics)
}

fn print_error(diagnostics: &Diagnostics, error: &ListDataError) {
    let error_type = match error {
        ListDataError::Io(_) => "IO Error",
        ListDataError::Enumeration { .. } => "Listing Error",
        ListDataError::Parse(_) => "Parse Error",
        ListDataError::Config(_) => "Config Error",
        ListDataError::Other(_) => "Error",
    };

    diagnostics.error(error_type, &error.to_string());
}
