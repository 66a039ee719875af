//! Command dispatch: resolve the catalog source, build the library, run
//! the requested operation.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{DomainError, LibraryBuilder, LoadReport, MovieLibrary};
use crate::util::path::PathExt;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Load { source }) => load(source.as_deref()),
        Some(Commands::Search { title, source }) => search(title, source.as_deref()),
        Some(Commands::Remove { title, source }) => remove(title, source.as_deref()),
        Some(Commands::List { source }) => list(source.as_deref()),
        Some(Commands::Tree { source }) => tree(source.as_deref()),
        Some(Commands::Stats { source }) => stats(source.as_deref()),
        Some(Commands::Config { command }) => config_command(command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

/// Resolve the catalog source: explicit argument first, configured default
/// second.
fn resolve_source(source: Option<&Path>) -> CliResult<(PathBuf, Settings)> {
    let settings = Settings::load()?;
    let path = match source {
        Some(path) => path.to_path_buf(),
        None => settings.catalog_file.clone().ok_or_else(|| {
            CliError::Usage("no catalog given and no catalog_file configured".to_string())
        })?,
    };
    if !path.exists() {
        return Err(DomainError::FileNotFound(path).into());
    }
    let path = path.to_canonical()?;
    Ok((path, settings))
}

fn build_library(source: Option<&Path>) -> CliResult<(MovieLibrary, LoadReport)> {
    let (path, settings) = resolve_source(source)?;
    let builder = LibraryBuilder::with_date_format(&settings.date_format);
    let result = if path.is_dir() {
        builder.build_from_directory(&path)?
    } else {
        builder.build_from_file(&path)?
    };
    Ok(result)
}

#[instrument]
fn load(source: Option<&Path>) -> CliResult<()> {
    let (library, report) = build_library(source)?;
    output::info(&format!("read {} records", report.records_read));
    if report.records_skipped > 0 {
        output::warning(&format!(
            "skipped {} records without a title",
            report.records_skipped
        ));
    }
    output::success(&format!(
        "built a library with {} unique movie titles",
        report.titles_added
    ));
    debug!("library height: {}", library.height());
    Ok(())
}

#[instrument]
fn search(title: &str, source: Option<&Path>) -> CliResult<()> {
    let (library, _) = build_library(source)?;
    match library.search(title) {
        Some(movie) => {
            output::info(&movie.full_display());
            Ok(())
        }
        None => Err(DomainError::TitleNotFound(title.to_string()).into()),
    }
}

#[instrument]
fn remove(title: &str, source: Option<&Path>) -> CliResult<()> {
    let (mut library, _) = build_library(source)?;
    let removed = library
        .remove(title)
        .ok_or_else(|| DomainError::TitleNotFound(title.to_string()))?;
    output::success(&format!("removed {}", removed.full_display()));
    output::info(&library.render());
    Ok(())
}

#[instrument]
fn list(source: Option<&Path>) -> CliResult<()> {
    let (library, _) = build_library(source)?;
    output::info(&library.iter().map(|movie| movie.to_string()).join("\n"));
    Ok(())
}

#[instrument]
fn tree(source: Option<&Path>) -> CliResult<()> {
    let (library, _) = build_library(source)?;
    println!("{}", library.to_tree_string());
    Ok(())
}

#[instrument]
fn stats(source: Option<&Path>) -> CliResult<()> {
    let (library, _) = build_library(source)?;
    output::header("Catalog");
    output::detail(&format!("size = {}; height = {}", library.len(), library.height()));
    if !library.is_consistent() {
        output::warning("tree structure failed its consistency check");
    }
    Ok(())
}

fn config_command(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            let rendered = toml::to_string_pretty(&settings)
                .map_err(|e| config::ConfigError::Message(e.to_string()))?;
            output::info(&rendered);
            Ok(())
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine a config directory".to_string())
            })?;
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Settings::template())?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("cannot determine a config directory"),
            }
            Ok(())
        }
    }
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    print_completions(shell, &mut cmd);
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
