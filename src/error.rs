// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed failures that abort a run before or outside the best-effort API phase
// role: errors/taxonomy
// outputs: ReportError variants surfaced through anyhow at the binary boundary
// invariants: HTTP and rate-limit failures never appear here; they degrade to empty data inside the client
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
  /// Input could not be split into an owner and a repository name.
  #[error("could not extract owner and repo name from `{0}`")]
  InvalidRepoReference(String),

  #[error("no repository given; pass REPO or set GITHUB_REPOSITORY")]
  MissingRepoReference,
}
