use crate::commands::args::ConfigAction;
use crate::env::ROOT_VAR;
use crate::error::{ConfigErrorKind, ListDataError, Result};
use crate::formatter::OutputFormat;
use crate::lister::TraversalMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use toml::Value as TomlValue;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_root_var")]
    pub root_var: String,
    #[serde(default)]
    pub traversal: TraversalMode,
    #[serde(default)]
    pub default_format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

fn default_root_var() -> String {
    ROOT_VAR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_var: default_root_var(),
            traversal: TraversalMode::default(),
            default_format: OutputFormat::default(),
            max_depth: None,
        }
    }
}

impl Config {
    /// Reads the config at `path`. A missing file yields the defaults and
    /// nothing is written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.generate_config_content())?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("list_data").join("config.toml")
    }

    fn generate_config_content(&self) -> String {
        let mut content = String::from("# list_data configuration\n\n");

        content.push_str("# Environment variable holding the directory to list\n");
        content.push_str(&format!(
            "root_var = {}\n\n",
            TomlValue::String(self.root_var.clone())
        ));

        content.push_str("# How children are descended into:\n");
        content.push_str("#   unjoined - recurse on bare names, resolved against the working directory\n");
        content.push_str("#   joined   - recurse on parent/child paths\n");
        content.push_str(&format!("traversal = \"{}\"\n\n", self.traversal));

        content.push_str(&format!(
            "# Output format: {}\n",
            OutputFormat::VALUES.join(", ")
        ));
        content.push_str(&format!("default_format = \"{}\"\n\n", self.default_format));

        content.push_str("# Deepest level enumerated, the root being 0 (unset = unlimited)\n");
        match self.max_depth {
            Some(depth) => content.push_str(&format!("max_depth = {}\n", depth)),
            None => content.push_str("# max_depth = 16\n"),
        }

        content
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_var.trim().is_empty() {
            return Err(ListDataError::Config(ConfigErrorKind::InvalidValue(
                "root_var".to_string(),
                "root_var cannot be empty".to_string(),
            )));
        }

        if self.root_var.contains('=') || self.root_var.contains('\0') {
            return Err(ListDataError::Config(ConfigErrorKind::InvalidValue(
                "root_var".to_string(),
                format!("'{}' is not a valid variable name", self.root_var),
            )));
        }

        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "root_var" => self.root_var = value.to_string(),
            "traversal" => self.traversal = value.parse()?,
            "default_format" => self.default_format = value.parse()?,
            "max_depth" => {
                self.max_depth = match value {
                    "" | "none" => None,
                    v => Some(v.parse().map_err(|_| {
                        ListDataError::Config(ConfigErrorKind::InvalidValue(
                            key.to_string(),
                            "must be a non-negative integer or 'none'".to_string(),
                        ))
                    })?),
                }
            }
            _ => {
                return Err(ListDataError::Config(ConfigErrorKind::InvalidValue(
                    key.to_string(),
                    "Unknown configuration key".to_string(),
                )))
            }
        }

        self.validate()
    }
}

pub fn initialize_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config file already exists at {:?}", path);
        println!("Use `list_data config` to view or modify the configuration.");
        return Ok(());
    }

    Config::default().save(path)?;
    println!("Created default configuration at {:?}", path);
    Ok(())
}

pub fn handle_config_command(action: &ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::View => {
            let config = Config::load(path)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Set(key, value) => {
            let mut config = Config::load(path)?;
            config.set_value(key, value)?;
            config.save(path)?;
            println!("Updated {} = {}", key, value);
            Ok(())
        }
    }
}
