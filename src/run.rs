// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: End-to-end flow for one repository: list -> enrich -> sort -> print and export
// role: orchestration
// inputs: EffectiveConfig, GithubApi backend
// outputs: Console summary on stdout; CSV (always) and JSON (optional) files
// invariants: Exports are written even when every API call degraded to no data
// errors: Only export IO errors propagate
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::EffectiveConfig;
use crate::enrich::enrich_all;
use crate::github::client::RateLimitedClient;
use crate::github::contributors::list_contributors;
use crate::github::GithubApi;
use crate::model::EnrichedContributor;
use crate::report;
use crate::util;

pub fn run(cfg: &EffectiveConfig) -> Result<()> {
  let client = RateLimitedClient::new(&cfg.api_base, cfg.token.clone(), cfg.max_retries);

  if cfg.token.is_none() {
    info!("No GitHub token found; using unauthenticated rate limits");
  }

  let sorted = collect_report(cfg, &client);
  debug!(remaining = ?client.rate_limit().remaining, "API quota after run");

  print!("{}", report::render_summary(&sorted));
  export(cfg, &sorted)
}

/// Fetch, enrich and sort; all network access goes through `api`.
pub fn collect_report(cfg: &EffectiveConfig, api: &dyn GithubApi) -> Vec<EnrichedContributor> {
  info!(repo = %cfg.repo, "Analyzing repository");

  let contributors = list_contributors(api, &cfg.repo);
  let enriched = enrich_all(api, &cfg.repo, contributors);

  report::sort_by_latest_commit(enriched)
}

pub fn export(cfg: &EffectiveConfig, sorted: &[EnrichedContributor]) -> Result<()> {
  util::ensure_parent_dir(&cfg.csv_path)?;
  report::write_csv(&report::flatten(sorted), &cfg.csv_path)?;
  info!("Data saved to {}", cfg.csv_path.display());

  if let Some(json_path) = &cfg.json_path {
    util::ensure_parent_dir(json_path)?;
    report::write_json(&cfg.repo, sorted, json_path)?;
    info!("JSON report saved to {}", json_path.display());
  }

  Ok(())
}
