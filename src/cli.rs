use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::refs::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "scriptref",
    version,
    about = "Reading-plan citation parsing and formatting tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Parse(ParseArgs),
    Format(FormatArgs),
    Ingest(IngestArgs),
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    pub text: Option<String>,

    #[arg(long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(required = true)]
    pub chapters: Vec<String>,

    #[arg(long, value_enum, default_value_t = Locale::English)]
    pub locale: Locale,
}

#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub plan_id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long, default_value_t = 365)]
    pub max_day: u32,

    #[arg(long, default_value = "")]
    pub source: String,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    pub plan: PathBuf,

    #[arg(long, value_enum, default_value_t = Locale::SimplifiedChinese)]
    pub locale: Locale,

    #[arg(long)]
    pub max_days: Option<usize>,

    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}
