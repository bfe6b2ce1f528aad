//! Subscription command implementation

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use mobscan::error::Result;

/// Run the subscriptions command
pub async fn check(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let response = ctx
        .client
        .check_subscriptions(&ctx.endpoint, &ctx.api_key)
        .await?;
    ctx.print(&response);

    Ok(())
}
