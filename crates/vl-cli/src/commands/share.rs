//! Share command implementation

use anyhow::Result;
use vl_core::to_query_string;

use crate::cli::{GlobalArgs, ShareArgs};
use crate::commands::common::browse_params;
use crate::context::RuntimeContext;

/// Execute the share command
pub async fn execute(args: &ShareArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;
    let params = browse_params(&args.filters, ctx.config.browse.default_sort);
    let query = to_query_string(&params);

    if query.is_empty() {
        ctx.verbose("No active search, filters or sort; nothing to share");
    }
    println!("{}", query);
    Ok(())
}
