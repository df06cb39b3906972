//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use serde::Serialize;
use vl_core::{hydrate, BrowseParams, SortOption};

use crate::cli::FilterArgs;

/// Build browse parameters from filter flags.
///
/// `--url` seeds the state; explicit flags are layered on top and only ever
/// add constraints. Without either, the configured default sort applies.
pub(crate) fn browse_params(args: &FilterArgs, default_sort: SortOption) -> BrowseParams {
    let mut params = match &args.url {
        Some(url) => hydrate(url),
        None => BrowseParams {
            sort: default_sort,
            ..BrowseParams::default()
        },
    };

    if let Some(query) = &args.query {
        params.search = query.clone();
    }

    let mut filters = std::mem::take(&mut params.filters);
    for &industry in &args.industry {
        filters = filters.with_industry(industry);
    }
    for &use_case in &args.use_case {
        filters = filters.with_use_case(use_case);
    }
    for &certification in &args.certification {
        filters = filters.with_certification(certification);
    }
    for &pricing in &args.pricing {
        filters = filters.with_pricing(pricing);
    }
    for &option in &args.deployment {
        filters = filters.with_deployment_option(option);
    }
    if args.verified {
        filters.set_verified(true);
    }
    if let Some(min_score) = args.min_score {
        filters.set_min_score(min_score);
    }
    params.filters = filters;

    if let Some(sort) = &args.sort {
        params.sort = SortOption::from_param(sort);
    }
    params
}

/// Pretty-print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

/// Widest entry in characters, clamped to `[min, max]`.
pub(crate) fn column_width<'a>(
    values: impl IntoIterator<Item = &'a str>,
    min: usize,
    max: usize,
) -> usize {
    values
        .into_iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(min)
        .clamp(min, max)
}

/// Truncate to a display width, marking the cut with `...`.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_core::{Certification, Industry};

    #[test]
    fn test_default_sort_applies_without_url() {
        let params = browse_params(&FilterArgs::default(), SortOption::Score);
        assert_eq!(params.sort, SortOption::Score);
        assert!(params.filters.is_default());
    }

    #[test]
    fn test_flags_layer_on_url() {
        let args = FilterArgs {
            url: Some("?industry=legal&sort=name&q=contract".to_string()),
            industry: vec![Industry::Finance],
            certification: vec![Certification::Gdpr],
            ..FilterArgs::default()
        };
        let params = browse_params(&args, SortOption::Score);

        assert_eq!(params.search, "contract");
        assert_eq!(params.sort, SortOption::Name);
        assert!(params.filters.industries().contains(&Industry::Legal));
        assert!(params.filters.industries().contains(&Industry::Finance));
        assert!(params.filters.certifications().contains(&Certification::Gdpr));
    }

    #[test]
    fn test_unknown_sort_flag_falls_back() {
        let args = FilterArgs {
            sort: Some("popularity".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(browse_params(&args, SortOption::Score).sort, SortOption::Relevance);
    }

    #[test]
    fn test_column_width_counts_chars() {
        assert_eq!(column_width(["Zürich Médical", "Acme"], 4, 32), 14);
        assert_eq!(column_width(["Ω"], 4, 32), 4);
        assert_eq!(column_width(std::iter::empty(), 6, 24), 6);
        assert_eq!(column_width(["a very long vendor name indeed"], 6, 24), 24);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Médical Systèmes", 10), "Médical...");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long tagline here", 10), "a long ...");
    }
}
