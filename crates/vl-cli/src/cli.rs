//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use vl_core::{Certification, DeploymentOption, Industry, PricingTier, Taxonomy, UseCase};

/// Vetline - browse, filter and compare AI tools for regulated industries
#[derive(Parser, Debug)]
#[command(name = "vl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override catalog path (also settable via VL_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search, filter and sort the catalog
    Browse(BrowseArgs),

    /// Show a single tool's detail view
    Show(ShowArgs),

    /// Compare up to four tools side by side
    Compare(CompareArgs),

    /// List available filter values with tool counts
    Facets(FacetsArgs),

    /// Print the shareable query string for a set of filters
    Share(ShareArgs),
}

/// Search, filter and sort flags shared by `browse` and `share`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search over names, descriptions and classifications
    #[arg(short = 'q', long = "query")]
    pub query: Option<String>,

    /// Only tools serving this industry (repeatable, OR within)
    #[arg(long, value_parser = parse_taxonomy::<Industry>)]
    pub industry: Vec<Industry>,

    /// Only tools covering this use case (repeatable)
    #[arg(long = "use-case", value_parser = parse_taxonomy::<UseCase>)]
    pub use_case: Vec<UseCase>,

    /// Only tools holding this certification (repeatable)
    #[arg(long, value_parser = parse_taxonomy::<Certification>)]
    pub certification: Vec<Certification>,

    /// Only tools at this pricing tier (repeatable)
    #[arg(long, value_parser = parse_taxonomy::<PricingTier>)]
    pub pricing: Vec<PricingTier>,

    /// Only tools offering this deployment option (repeatable)
    #[arg(long, value_parser = parse_taxonomy::<DeploymentOption>)]
    pub deployment: Vec<DeploymentOption>,

    /// Only verified tools
    #[arg(long)]
    pub verified: bool,

    /// Minimum governance score (0-100)
    #[arg(long = "min-score", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Sort key: relevance, score, reviews, newest, name
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Start from a shared query string (e.g. "?industry=healthcare&sort=score")
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Tool slug
    pub slug: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Tool slugs; the first four distinct known slugs are compared
    #[arg(required = true)]
    pub slugs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the facets command
#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the share command
#[derive(Args, Debug)]
pub struct ShareArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Accept a taxonomy value by label or key, case-insensitively.
fn parse_taxonomy<T: Taxonomy + Send + Sync>(raw: &str) -> Result<T, String> {
    T::from_param(raw).ok_or_else(|| {
        let keys: Vec<&str> = T::all().iter().map(|v| v.key()).collect();
        format!(
            "unknown {} '{}', expected one of: {}",
            T::CATEGORY,
            raw,
            keys.join(", ")
        )
    })
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
