// SPDX-License-Identifier: PMPL-1.0-or-later

//! subtag-registry: describe and normalize BCP-47 tags from the command line
//!
//! A thin shell over the library: load the configured registry once, then
//! resolve tags given as arguments or read from a file.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use subtag_registry::config::Config;
use subtag_registry::diagnostics;
use subtag_registry::i18n::Lang;
use subtag_registry::lookup::LanguageLookup;
use subtag_registry::report::{OutputFormat, RegistrySummary, TagResult};
use subtag_registry::{RegistryIndex, Resolver};
use tracing::{debug, info};

const LOG_ENV: &str = "SUBTAG_REGISTRY_LOG";

#[derive(Parser)]
#[command(name = "subtag-registry")]
#[command(version)]
#[command(about = "Describe and normalize BCP-47 language tags using the IANA subtag registry")]
#[command(long_about = None)]
struct Cli {
    /// Registry file (defaults to ./language-subtag-registry.txt)
    #[arg(long, global = true, value_name = "PATH")]
    registry: Option<PathBuf>,

    /// JSON or YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// UI language for the private-use placeholder and labels (en, es, fr, de, ja)
    #[arg(long, global = true, value_name = "CODE")]
    lang: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the description of each tag, one per line
    Describe {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Print the canonical form of each tag, one per line
    Normalize {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Resolve tags to both description and canonical form
    Resolve {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve every tag in a file (one per line, `#` starts a comment)
    Batch {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Look a code up in the curated list, falling back to the registry
    Lookup {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// List curated language names, sorted for display
    Languages {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show registry file date, table sizes and private-use ranges
    Info {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check configuration and registry health
    Diagnose,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_env()
    .with_overrides(cli.registry.clone(), cli.lang.clone());
    debug!(?config, "configuration resolved");

    let load = || -> Result<(Resolver, Lang)> {
        let lang = config.ui_lang()?;
        let path = config.registry_path();
        let index = RegistryIndex::from_path(&path)?;
        info!(
            path = %path.display(),
            file_date = index.file_date().unwrap_or("-"),
            "registry ready"
        );
        Ok((Resolver::with_lang(index, lang), lang))
    };

    match cli.command {
        Commands::Describe { tags } => {
            let (resolver, _) = load()?;
            let mut unmatched = 0;
            for tag in &tags {
                let description = resolver.describe(tag);
                if description.is_empty() {
                    unmatched += 1;
                }
                println!("{}", description);
            }
            ensure_matched(unmatched)?;
        }

        Commands::Normalize { tags } => {
            let (resolver, _) = load()?;
            let mut unmatched = 0;
            for tag in &tags {
                let canonical = resolver.normalize(tag);
                if canonical.is_empty() {
                    unmatched += 1;
                }
                println!("{}", canonical);
            }
            ensure_matched(unmatched)?;
        }

        Commands::Resolve { tags, format } => {
            let (resolver, lang) = load()?;
            let results: Vec<TagResult> = tags
                .iter()
                .map(|tag| TagResult::resolve(&resolver, tag))
                .collect();
            println!("{}", format.render_results(&results, lang)?);
        }

        Commands::Batch { file, format } => {
            let (resolver, lang) = load()?;
            let content = fs::read_to_string(&file)
                .with_context(|| format!("reading tag list {}", file.display()))?;
            let tags: Vec<&str> = content
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty())
                .collect();
            debug!(count = tags.len(), "resolving batch");
            let results: Vec<TagResult> = tags
                .par_iter()
                .map(|tag| TagResult::resolve(&resolver, tag))
                .collect();
            let matched = results.iter().filter(|result| result.matched()).count();
            info!(total = results.len(), matched, "batch resolved");
            println!("{}", format.render_results(&results, lang)?);
        }

        Commands::Lookup { code } => {
            let (resolver, _) = load()?;
            let lookup = LanguageLookup::new(resolver);
            match lookup.get_language(&code) {
                Some(language) => println!("{}", language.description),
                None => bail!("no language found for '{}'", code),
            }
        }

        Commands::Languages { format } => {
            let (resolver, lang) = load()?;
            let lookup = LanguageLookup::new(resolver);
            println!(
                "{}",
                format.render_languages(&lookup.languages_sorted(), lang)?
            );
        }

        Commands::Info { format } => {
            let (resolver, lang) = load()?;
            let summary = RegistrySummary::from_index(resolver.index());
            println!("{}", format.render_summary(&summary, lang)?);
        }

        Commands::Diagnose => diagnostics::run_self_diagnostics(&config)?,
    }

    Ok(())
}

fn ensure_matched(unmatched: usize) -> Result<()> {
    if unmatched > 0 {
        bail!("{} tag(s) did not match the registry", unmatched);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("subtag_registry=debug")
        } else {
            EnvFilter::new("subtag_registry=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
