//! Test credential commands

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use mobscan::client::Credential;
use mobscan::error::Result;

/// Arguments for `mobscan credentials`
#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Credential as NAME=VALUE (repeatable)
    #[arg(
        long = "credential",
        value_name = "NAME=VALUE",
        value_parser = parse_credential,
        required = true
    )]
    pub credentials: Vec<Credential>,
}

/// Parse `NAME=VALUE`; the value may itself contain `=`
fn parse_credential(raw: &str) -> std::result::Result<Credential, String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok(Credential::new(name.trim(), value)),
        _ => Err("expected NAME=VALUE with a non-empty NAME".to_string()),
    }
}

/// Run the credentials command
pub async fn create(args: &CredentialArgs, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let response = ctx
        .client
        .create_test_credentials(&ctx.endpoint, args.credentials.clone(), &ctx.api_key)
        .await?;
    ctx.print(&response);

    Ok(())
}
