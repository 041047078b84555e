// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Normalize repository references (https URL, ssh URL, owner/name) into an owner/name pair
// role: input/parsing
// inputs: Free-form reference string from CLI or environment
// outputs: RepoRef
// invariants:
// - Only the first two path segments are significant; deeper paths (tree/blob links) are ignored
// - Equivalent references in any supported format yield the same RepoRef
// errors: ReportError::InvalidRepoReference when fewer than two non-empty segments remain
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

const HTTPS_PREFIX: &str = "https://github.com/";
const SSH_PREFIX: &str = "git@github.com:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
  pub owner: String,
  pub name: String,
}

impl RepoRef {
  pub fn parse(input: &str) -> Result<Self, ReportError> {
    let trimmed = input.trim();
    let cleaned = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let path = if let Some(rest) = cleaned.strip_prefix(HTTPS_PREFIX) {
      rest
    } else if let Some(rest) = cleaned.strip_prefix(SSH_PREFIX) {
      rest
    } else {
      cleaned
    };

    let mut parts = path.split('/');
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    let name = name.strip_suffix(".git").unwrap_or(name);

    if owner.is_empty() || name.is_empty() {
      return Err(ReportError::InvalidRepoReference(input.to_string()));
    }

    Ok(Self {
      owner: owner.to_string(),
      name: name.to_string(),
    })
  }

  /// Default CSV export file name for this repository.
  pub fn csv_file_name(&self) -> String {
    format!("{}_{}_contributors.csv", self.owner, self.name)
  }
}

impl fmt::Display for RepoRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}
