//! Scan commands: upload, progress and risk

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use mobscan::client::UploadRequest;
use mobscan::error::{ConfigError, Result};

/// Arguments for `mobscan upload`
#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    /// Application binary (APK, AAB or IPA)
    pub file: PathBuf,

    /// Scan title
    #[arg(long)]
    pub title: String,

    /// Platform of the binary (android, ios)
    #[arg(long)]
    pub platform: String,

    /// Scan profile
    #[arg(long, default_value = "Fast Scan")]
    pub scan_profile: String,

    /// Test credential ID to use during the scan
    #[arg(long)]
    pub credential_id: Option<i32>,

    /// File name sent to the service (defaults to the file's own name)
    #[arg(long)]
    pub file_name: Option<String>,
}

fn upload_file_name(args: &UploadArgs) -> Result<String> {
    if let Some(name) = &args.file_name {
        return Ok(name.clone());
    }
    args.file
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ConfigError::Invalid(format!("{} has no usable file name", args.file.display())).into()
        })
}

/// Run the upload command
pub async fn upload(args: &UploadArgs, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let file_name = upload_file_name(args)?;
    let bytes = read_binary(&args.file)?;
    log::info!("Uploading {} ({} bytes)", file_name, bytes.len());

    let upload = UploadRequest {
        title: &args.title,
        file_name: &file_name,
        file_bytes: &bytes,
        scan_profile: &args.scan_profile,
        platform: &args.platform,
        credential_id: args.credential_id,
    };
    let response = ctx
        .client
        .upload_scan(&ctx.endpoint, &ctx.api_key, &upload)
        .await?;
    ctx.print(&response);

    Ok(())
}

fn read_binary(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Run the progress command
pub async fn progress(scan_id: i32, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let response = ctx
        .client
        .get_progress(&ctx.endpoint, scan_id, &ctx.api_key)
        .await?;
    ctx.print(&response);

    Ok(())
}

/// Run the risk command
pub async fn risk(scan_id: i32, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let response = ctx
        .client
        .get_risk(&ctx.endpoint, scan_id, &ctx.api_key)
        .await?;
    ctx.print(&response);

    Ok(())
}
