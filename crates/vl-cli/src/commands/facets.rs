//! Facets command implementation

use anyhow::Result;
use vl_core::{FacetCount, FacetOptions, Taxonomy};

use crate::cli::{FacetsArgs, GlobalArgs, OutputFormat};
use crate::commands::common::print_json;
use crate::context::RuntimeContext;

/// Execute the facets command
pub async fn execute(args: &FacetsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;
    let facets = ctx.facets().await?;

    match args.output {
        OutputFormat::Table => print_table(&facets),
        OutputFormat::Json => print_json(&facets)?,
    }

    Ok(())
}

fn print_table(facets: &FacetOptions) {
    if facets.is_empty() {
        println!("No filter values available.");
        return;
    }

    print_group("Industries", &facets.industries);
    print_group("Use cases", &facets.use_cases);
    print_group("Certifications", &facets.certifications);
    print_group("Pricing", &facets.pricing);
    print_group("Deployment", &facets.deployment_options);
}

fn print_group<T: Taxonomy>(title: &str, counts: &[FacetCount<T>]) {
    if counts.is_empty() {
        return;
    }
    let width = counts
        .iter()
        .map(|c| c.value.label().len())
        .max()
        .unwrap_or(5)
        .max(5);

    println!("{}:", title);
    for count in counts {
        println!(
            "  {:<width$}  {:<24}  {}",
            count.value.label(),
            count.value.key(),
            count.count
        );
    }
    println!();
}
