// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub REST access for the report: API seam, rate-limited HTTP client, token discovery, contributor paging
// role: github/namespace
// inputs: env GITHUB_TOKEN / GH_TOKEN; optional `gh` CLI for token fallback
// outputs: GithubApi implementations returning serde_json::Value
// invariants:
// - Every outbound call goes through GithubApi::get_json
// - get_json never fails; unusable responses read as an empty JSON object
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod client;
pub mod contributors;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Seam over the hosting API so fetching and enrichment can run against test doubles.
pub trait GithubApi {
  /// GET `path` (relative to the API base) with query pairs; "no data" is an empty object.
  fn get_json(&self, path: &str, query: &[(&str, String)]) -> serde_json::Value;
}

pub fn empty_json() -> serde_json::Value {
  serde_json::Value::Object(serde_json::Map::new())
}

/// Discover a GitHub token: env vars first, then `gh auth token` if available.
pub fn get_github_token() -> Option<String> {
  for key in ["GITHUB_TOKEN", "GH_TOKEN"] {
    if let Ok(t) = std::env::var(key) {
      if !t.trim().is_empty() {
        return Some(t.trim().to_string());
      }
    }
  }

  if let Ok(output) = std::process::Command::new("gh").args(["auth", "token"]).output() {
    if output.status.success() {
      let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

      if !t.is_empty() {
        return Some(t);
      }
    }
  }

  None
}
