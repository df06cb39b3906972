//! CLI command implementations

pub(crate) mod browse;
pub(crate) mod common;
pub(crate) mod compare;
pub(crate) mod facets;
pub(crate) mod share;
pub(crate) mod show;
