use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cro::cli::Cli;
use cro::config::{ColorSetting, Config, Paths};
use cro::output::apply_color_setting;
use cro::storage::FileStorage;
use cro::{logging, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path)?;

    logging::init(&config.logging.level, cli.verbose)?;

    let color = if cli.no_color {
        ColorSetting::Never
    } else {
        config.display.color
    };
    apply_color_setting(color);

    let data_file = cli.data_file.clone().unwrap_or_else(|| config.data_file(&paths));
    let save_policy = cli.save_policy.unwrap_or(config.storage.save_policy);

    let storage = FileStorage::at(data_file);
    let mut session = Session::open(storage, save_policy)
        .with_context(|| "Failed to load the task list")?
        .with_banners(config.display.banners && !cli.quiet)
        .with_color(colored::control::SHOULD_COLORIZE.should_colorize());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .with_context(|| "Session ended abnormally")?;

    Ok(())
}
