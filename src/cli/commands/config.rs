//! `folio config` command - Inspect the layered configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::Path;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::{
    DEFAULT_CONTACT_URL, DEFAULT_FEATURED_LIMIT, DEFAULT_PRIMARY_BADGES,
};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show(ShowArgs),

    /// Show paths to configuration files
    Path(PathArgs),

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,

    /// Show only the local (./folio.yaml) file
    #[arg(long = "local-only", conflicts_with = "global_only")]
    pub local_only: bool,

    /// Show only the global (user) file
    #[arg(long = "global-only")]
    pub global_only: bool,
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Show only the local config path
    #[arg(long = "local-only", conflicts_with = "global_only")]
    pub local_only: bool,

    /// Show only the global config path
    #[arg(long = "global-only")]
    pub global_only: bool,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    (
        "default_format",
        "Default output format (yaml, json, tsv, etc.)",
    ),
    ("featured_limit", "Projects shown by `folio featured`"),
    ("contact_url", "Where contact actions send visitors"),
    ("primary_badges", "Technology badges shown per project"),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Path(args) => run_path(args),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    if let Some(key) = &args.key {
        if !VALID_KEYS.iter().any(|(k, _)| k == key) {
            return Err(miette::miette!(
                help = "Run `folio config keys` to list valid keys",
                "Unknown config key '{}'",
                key
            ));
        }
        match config.get(key) {
            Some(v) => println!("{}", v),
            None => return Err(miette::miette!("Key '{}' is not set", key)),
        }
        return Ok(());
    }

    if args.local_only {
        return show_file("Local config:", &Config::local_config_path());
    }
    if args.global_only {
        let path = Config::global_config_path()
            .ok_or_else(|| miette::miette!("Could not determine global config directory"))?;
        return show_file("Global config:", &path);
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config).into_diagnostic()?);
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&config).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();

    print_config_value("default_format", config.default_format.as_deref(), None);
    print_config_value(
        "featured_limit",
        config.featured_limit.map(|v| v.to_string()).as_deref(),
        Some(&DEFAULT_FEATURED_LIMIT.to_string()),
    );
    print_config_value(
        "contact_url",
        config.contact_url.as_deref(),
        Some(DEFAULT_CONTACT_URL),
    );
    print_config_value(
        "primary_badges",
        config.primary_badges.map(|v| v.to_string()).as_deref(),
        Some(&DEFAULT_PRIMARY_BADGES.to_string()),
    );

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Environment variables (FOLIO_FORMAT, FOLIO_FEATURED_LIMIT, FOLIO_CONTACT_URL)");
    println!("  2. Local config (./folio.yaml)");
    println!("  3. Global config (~/.config/folio/config.yaml)");

    Ok(())
}

fn run_path(args: PathArgs) -> Result<()> {
    let global_path = Config::global_config_path();
    let local_path = Config::local_config_path();

    if args.local_only {
        println!("{}", local_path.display());
        return Ok(());
    }
    if args.global_only {
        let path = global_path
            .ok_or_else(|| miette::miette!("Could not determine global config directory"))?;
        println!("{}", path.display());
        return Ok(());
    }

    println!("{}", style("Configuration file paths:").bold());
    println!();
    match &global_path {
        Some(path) => {
            println!("  {} {}", style("Global:").cyan(), path.display());
            println!("         {}", exists_marker(path));
        }
        None => println!(
            "  {} {}",
            style("Global:").cyan(),
            style("(no config directory)").dim()
        ),
    }
    println!();
    println!("  {} {}", style("Local:").cyan(), local_path.display());
    println!("         {}", exists_marker(&local_path));

    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();

    for (key, description) in VALID_KEYS {
        println!("  {:<20} {}", style(key).cyan(), style(description).dim());
    }

    println!();
    println!(
        "{}",
        style("Set keys in ./folio.yaml or the global config file.").dim()
    );

    Ok(())
}

fn exists_marker(path: &Path) -> console::StyledObject<&'static str> {
    if path.exists() {
        style("(exists)").green()
    } else {
        style("(not created)").dim()
    }
}

fn print_config_value(key: &str, value: Option<&str>, default: Option<&str>) {
    match (value, default) {
        (Some(v), _) => println!("  {}: {}", style(key).cyan(), style(v).yellow()),
        (None, Some(d)) => println!(
            "  {}: {} {}",
            style(key).cyan(),
            d,
            style("(default)").dim()
        ),
        (None, None) => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
    }
}

fn show_file(title: &str, path: &Path) -> Result<()> {
    println!("{} {}", style(title).bold(), style(path.display()).dim());
    println!();

    if path.exists() {
        let content = fs::read_to_string(path).into_diagnostic()?;
        print!("{}", content);
    } else {
        println!("{}", style("(not created)").dim());
    }

    Ok(())
}
