use super::args::{Args, Command};
use crate::config;
use crate::env::Environment;
use crate::error::Result;
use crate::formatter::write_entries;
use crate::lister::list_files_in;
use crate::utils::color::Diagnostics;
use std::io;

pub fn handle_command(args: &Args, diagnostics: &Diagnostics) -> Result<()> {
    match &args.command {
        Some(Command::InitConfig) => config::initialize_config(&args.config_path),
        Some(Command::Config(action)) => config::handle_config_command(action, &args.config_path),
        None => list_root(args, &Environment::capture(), diagnostics),
    }
}

fn list_root(args: &Args, env: &Environment, diagnostics: &Diagnostics) -> Result<()> {
    match env.get(&args.root_var) {
        Some(root) => diagnostics.info(&format!("root {} (from {})", root, args.root_var)),
        None => diagnostics.info(&format!("{} is not set, nothing to list", args.root_var)),
    }
    diagnostics.info(&format!("traversal: {}", args.traversal));

    let lister = args.traversal.lister(args.max_depth);
    let entries = list_files_in(env, &args.root_var, lister.as_ref());
    diagnostics.info(&format!("{} entries", entries.len()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, &entries, args.output_mode)
}
