//! Compare command implementation

use anyhow::Result;
use vl_core::{ComparisonStore, ComparisonTable, MAX_COMPARE};

use crate::cli::{CompareArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{column_width, print_json};
use crate::context::RuntimeContext;

/// Execute the compare command
pub async fn execute(args: &CompareArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;

    for slug in &args.slugs {
        if ctx.catalog.get(slug).is_none() {
            eprintln!("Warning: unknown tool '{}', skipping", slug);
        }
    }

    let store = ComparisonStore::resolve(&ctx.catalog, args.slugs.as_slice());
    ctx.verbose(&format!(
        "Comparing {} of {} requested tools (max {})",
        store.len(),
        args.slugs.len(),
        MAX_COMPARE
    ));

    if store.is_empty() {
        anyhow::bail!("No known tools to compare");
    }

    let table = store.table();
    match args.output {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(&table)?,
    }

    Ok(())
}

/// Print the comparison grid, one column per tool
fn print_table(table: &ComparisonTable) {
    let label_width = column_width(
        table
            .attributes
            .iter()
            .map(|row| row.label)
            .chain(table.features.iter().map(|row| row.feature.as_str())),
        9,
        usize::MAX,
    );
    let cell_width = column_width(
        table.columns.iter().map(String::as_str).chain(
            table
                .attributes
                .iter()
                .flat_map(|row| row.values.iter().map(String::as_str)),
        ),
        4,
        40,
    );

    let print_row = |label: &str, cells: Vec<String>| {
        let cells: Vec<String> = cells
            .iter()
            .map(|c| format!("{:<cell_width$}", c))
            .collect();
        println!("{:<label_width$}  {}", label, cells.join("  ").trim_end());
    };

    print_row("", table.columns.clone());
    println!(
        "{:-<label_width$}  {}",
        "",
        vec!["-".repeat(cell_width); table.columns.len()].join("  ")
    );
    for row in &table.attributes {
        print_row(row.label, row.values.clone());
    }

    if !table.features.is_empty() {
        println!();
        for row in &table.features {
            let marks = row
                .present
                .iter()
                .map(|&present| (if present { "yes" } else { "-" }).to_string())
                .collect();
            print_row(&row.feature, marks);
        }
    }
}
