//! CLI argument definitions for the qualification catalogue generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use qualcat_model::{Faculty, QualificationLevel};

#[derive(Parser)]
#[command(
    name = "qualcat",
    version,
    about = "Qualification catalogue generator - Convert a JSON catalogue to a TypeScript module",
    long_about = "Convert a JSON qualification catalogue into a typed TypeScript module.\n\n\
                  Classifies each record by level and faculty, synthesizes stable\n\
                  identifiers and embeds the normalized records with query helpers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the TypeScript module from a catalogue.
    Generate(GenerateArgs),

    /// List normalized qualifications, optionally filtered.
    List(ListArgs),

    /// Print one normalized qualification as JSON.
    Show(ShowArgs),

    /// List the distinct faculties in a catalogue.
    Faculties(CatalogueArgs),

    /// List the distinct levels in a catalogue.
    Levels(CatalogueArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the JSON catalogue.
    #[arg(value_name = "CATALOGUE_JSON")]
    pub input: PathBuf,

    /// Output file (default: qualifications.ts next to the catalogue).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Title written in the module header comment.
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Transform and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the JSON catalogue.
    #[arg(value_name = "CATALOGUE_JSON")]
    pub input: PathBuf,

    /// Only qualifications at this level (e.g. "Masters Degree").
    #[arg(long = "level", value_name = "LABEL")]
    pub level: Option<QualificationLevel>,

    /// Only qualifications at this NQF level.
    #[arg(long = "nqf", value_name = "N")]
    pub nqf: Option<u32>,

    /// Only qualifications in this faculty (e.g. "Information Technology").
    #[arg(long = "faculty", value_name = "LABEL")]
    pub faculty: Option<Faculty>,

    /// Case-insensitive match on name, description and faculty.
    #[arg(long = "search", short = 's', value_name = "QUERY")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the JSON catalogue.
    #[arg(value_name = "CATALOGUE_JSON")]
    pub input: PathBuf,

    /// Qualification identifier (e.g. MBA).
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct CatalogueArgs {
    /// Path to the JSON catalogue.
    #[arg(value_name = "CATALOGUE_JSON")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
