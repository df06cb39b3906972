//! Browse command implementation

use anyhow::Result;
use serde::Serialize;
use vl_core::{join_labels, BrowseSession, FilterState, SortOption, Tool};

use crate::cli::{BrowseArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{browse_params, column_width, print_json, truncate};
use crate::context::RuntimeContext;

/// Execute the browse command
pub async fn execute(args: &BrowseArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;
    let params = browse_params(&args.filters, ctx.config.browse.default_sort);
    let session = BrowseSession::with_params(&ctx.catalog, params);

    ctx.verbose(&format!(
        "Search '{}', {} active filters, sort {}",
        session.search(),
        session.filters().active_filter_count(),
        session.sort()
    ));

    match args.output {
        OutputFormat::Table => print_table(&session),
        OutputFormat::Json => print_json(&BrowseReport::from_session(&session))?,
    }

    Ok(())
}

/// Browse results for JSON output
#[derive(Debug, Serialize)]
struct BrowseReport<'a> {
    search: &'a str,
    filters: &'a FilterState,
    sort: SortOption,
    total: usize,
    count: usize,
    share: String,
    results: &'a [&'a Tool],
}

impl<'a> BrowseReport<'a> {
    fn from_session(session: &'a BrowseSession<'a>) -> Self {
        Self {
            search: session.search(),
            filters: session.filters(),
            sort: session.sort(),
            total: session.total(),
            count: session.results().len(),
            share: session.share_query(),
            results: session.results(),
        }
    }
}

/// Print results in table format
fn print_table(session: &BrowseSession<'_>) {
    let results = session.results();
    let total = session.total();

    if results.is_empty() {
        if total == 0 {
            println!("No tools in catalog.");
        } else {
            println!("No tools match your search or filters.");
        }
        return;
    }

    let slug_width = column_width(results.iter().map(|t| t.slug.as_str()), 4, usize::MAX);
    let name_width = column_width(results.iter().map(|t| t.name.as_str()), 4, 32);
    let vendor_width = column_width(results.iter().map(|t| t.vendor.as_str()), 6, 24);

    println!(
        "{:<slug_width$}  {:<name_width$}  {:<vendor_width$}  {:>5}  {:>7}  {:<8}  {:<10}  INDUSTRIES",
        "SLUG", "NAME", "VENDOR", "SCORE", "REVIEWS", "VERIFIED", "PRICING",
    );
    println!(
        "{:-<slug_width$}  {:-<name_width$}  {:-<vendor_width$}  {:-<5}  {:-<7}  {:-<8}  {:-<10}  {}",
        "", "", "", "", "", "", "",
        "-".repeat(30),
    );

    for tool in results {
        println!(
            "{:<slug_width$}  {:<name_width$}  {:<vendor_width$}  {:>5}  {:>7}  {:<8}  {:<10}  {}",
            tool.slug,
            truncate(&tool.name, name_width),
            truncate(&tool.vendor, vendor_width),
            tool.score,
            tool.reviews,
            if tool.verified { "yes" } else { "no" },
            tool.pricing,
            join_labels(&tool.industries),
        );
    }

    println!();
    println!("Showing {} of {} tools", results.len(), total);
    let active = session.filters().active_filter_count();
    if active > 0 {
        println!("{} active filters", active);
    }
}
