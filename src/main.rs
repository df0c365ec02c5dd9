// SPDX-License-Identifier: PMPL-1.0-or-later

//! lcid: inspect and convert Windows locale identifiers.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use lcid_locale::config::LcidConfig;
use lcid_locale::diagnostics;
use lcid_locale::locale::{self, Locale};
use lcid_locale::registry::{self, LanguageEntry};
use lcid_locale::service;
use lcid_locale::{Lcid, SortId};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lcid")]
#[command(version)]
#[command(about = "Convert Windows LCIDs to locales and back")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an LCID to a locale using the built-in table
    Lookup {
        /// LCID, decimal (1033) or hex (0x0409)
        #[arg(value_name = "LCID")]
        lcid: Lcid,

        /// Print JSON
        #[arg(long)]
        json: bool,

        /// Explain why a conversion produced nothing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Find the table row for a BCP-47 tag (exact, case-sensitive)
    Tag {
        #[arg(value_name = "TAG")]
        tag: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Pack a language identifier and sort into an LCID
    Compose {
        /// Language identifier, decimal or hex
        #[arg(short, long)]
        language: Lcid,

        /// Sort identifier, e.g. german-phone-book or SORT_CHINESE_PRC
        #[arg(short, long, value_parser = parse_sort, default_value = "default")]
        sort: SortId,
    },

    /// Print the whole registry
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert through the service a config file selects
    Resolve {
        /// Service config (.json, .yaml, .yml); defaults apply if absent
        #[arg(short, long, default_value = "lcid.yaml")]
        config: PathBuf,

        /// Override the configured mode (table, fixed)
        #[arg(short, long)]
        mode: Option<String>,

        #[arg(value_name = "LCID")]
        lcid: Option<Lcid>,
    },

    /// Check the registry for duplicates and unparsable rows
    Check,
}

fn parse_sort(value: &str) -> Result<SortId, String> {
    SortId::from_name(value).ok_or_else(|| format!("unknown sort id '{}'", value))
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    lcid: Lcid,
    entry: Option<&'a LanguageEntry>,
    locale: Option<Locale>,
    tag: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            lcid,
            json,
            verbose,
        } => {
            let resolved = locale::resolve(lcid.raw());
            if verbose {
                if let Err(err) = &resolved {
                    eprintln!("warning: {}: {}", lcid, err);
                }
            }
            let found = resolved.ok();

            if json {
                let output = LookupOutput {
                    lcid,
                    entry: lcid.language_entry(),
                    tag: found.as_ref().map(Locale::to_language_tag),
                    locale: found,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                match found {
                    Some(locale) => println!(
                        "{} -> {} ({})",
                        lcid,
                        locale.to_string().bold(),
                        locale.to_language_tag()
                    ),
                    None => println!("{} -> {}", lcid, "no locale".yellow()),
                }
            }
        }

        Commands::Tag { tag, json } => {
            let entry = registry::lookup_by_tag(Some(&tag))
                .ok_or_else(|| anyhow!("no language identifier for tag '{}'", tag))?;
            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                print_entry(entry);
            }
        }

        Commands::Compose { language, sort } => {
            let language_id = u16::try_from(language.raw()).map_err(|_| {
                anyhow!("language identifier {} does not fit in 16 bits", language)
            })?;
            let lcid = Lcid::with_sort(language_id, sort)?;
            println!("{} ({})", lcid, lcid.raw());
        }

        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(registry::entries())?);
            } else {
                println!(
                    "{}",
                    format!("{} language identifiers", registry::len())
                        .bold()
                        .cyan()
                );
                for entry in registry::entries() {
                    print_entry(entry);
                }
            }
        }

        Commands::Resolve { config, mode, lcid } => {
            let mut config = LcidConfig::load_or_default(&config);
            if let Some(mode) = mode {
                config.override_mode(&mode)?;
            }
            let service = service::service_for(&config);
            let raw = lcid.map(|value| value.raw());
            match service.lcid_to_locale(raw) {
                Some(locale) => println!("{} ({})", locale, locale.to_language_tag()),
                None => println!("{}", "no locale".yellow()),
            }
        }

        Commands::Check => diagnostics::run_registry_check()?,
    }

    Ok(())
}

fn print_entry(entry: &LanguageEntry) {
    println!(
        "  0x{:04X}  {:14} {}",
        entry.code(),
        entry.canonical().unwrap_or("-"),
        entry.language_tag().unwrap_or("-")
    );
}
