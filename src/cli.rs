use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::error::ReportError;
use crate::github::client::DEFAULT_MAX_RETRIES;
use crate::github::{get_github_token, DEFAULT_API_BASE};
use crate::repo_ref::RepoRef;

#[derive(Parser, Debug)]
#[command(
    name = "contributor-report",
    version,
    about = "Report a GitHub repository's contributors sorted by most recent commit",
    long_about = None
)]
pub struct Cli {
  /// Repository: owner/name, https://github.com/owner/name[/...], or git@github.com:owner/name
  /// (default: $GITHUB_REPOSITORY)
  pub repo: Option<String>,

  /// API token (default: $GITHUB_TOKEN, $GH_TOKEN, then `gh auth token`)
  #[arg(long)]
  pub token: Option<String>,

  /// Directory for the default CSV export
  #[arg(long, default_value = ".")]
  pub out_dir: PathBuf,

  /// CSV export path (default: <out-dir>/<owner>_<name>_contributors.csv)
  #[arg(long)]
  pub csv: Option<PathBuf>,

  /// Also write the sorted report as JSON to this path
  #[arg(long)]
  pub json: Option<PathBuf>,

  /// Retries per request while the API reports an exceeded rate limit
  #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
  pub max_retries: u32,

  /// API base URL (hidden; tests only)
  #[arg(long, hide = true, default_value = DEFAULT_API_BASE)]
  pub api_base: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub repo: RepoRef,
  pub token: Option<String>,
  pub api_base: String,
  pub csv_path: PathBuf,
  pub json_path: Option<PathBuf>,
  pub max_retries: u32,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let raw_repo = match cli.repo {
    Some(r) => r,
    None => std::env::var("GITHUB_REPOSITORY")
      .ok()
      .filter(|r| !r.trim().is_empty())
      .ok_or(ReportError::MissingRepoReference)?,
  };
  let repo = RepoRef::parse(&raw_repo)?;

  let token = cli
    .token
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
    .or_else(get_github_token);

  let csv_path = cli.csv.unwrap_or_else(|| cli.out_dir.join(repo.csv_file_name()));

  Ok(EffectiveConfig {
    repo,
    token,
    api_base: cli.api_base,
    csv_path,
    json_path: cli.json,
    max_retries: cli.max_retries,
  })
}
