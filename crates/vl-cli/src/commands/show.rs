//! Show command implementation

use anyhow::{Context, Result};
use vl_core::{join_labels, Tool};

use crate::cli::{GlobalArgs, OutputFormat, ShowArgs};
use crate::commands::common::print_json;
use crate::context::RuntimeContext;

/// Execute the show command
pub async fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;
    let tool = ctx
        .catalog
        .require(&args.slug)
        .context("Cannot show tool")?;

    match args.output {
        OutputFormat::Table => print_detail(tool),
        OutputFormat::Json => print_json(tool)?,
    }

    Ok(())
}

fn print_detail(tool: &Tool) {
    let verified = if tool.verified { " [verified]" } else { "" };
    println!("{} by {}{}", tool.name, tool.vendor, verified);
    if !tool.tagline.is_empty() {
        println!("{}", tool.tagline);
    }
    println!();

    let rows = [
        ("Score", format!("{}/{}", tool.score, vl_core::MAX_SCORE)),
        ("Reviews", tool.reviews.to_string()),
        ("Pricing", tool.pricing.to_string()),
        ("Industries", join_labels(&tool.industries)),
        ("Use cases", join_labels(&tool.use_cases)),
        ("Certifications", join_labels(&tool.certifications)),
        ("Deployment", join_labels(&tool.deployment_options)),
        ("Last updated", tool.last_updated.format("%Y-%m-%d").to_string()),
        ("Website", tool.website.clone().unwrap_or_else(|| "-".to_string())),
    ];
    for (label, value) in rows {
        println!("  {:<15} {}", format!("{}:", label), value);
    }

    if !tool.features.is_empty() {
        println!();
        println!("Features:");
        for feature in &tool.features {
            println!("  - {}", feature);
        }
    }

    if !tool.description.is_empty() {
        println!();
        println!("{}", tool.description);
    }
}
