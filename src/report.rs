// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Order enriched contributors and render them (console summary, flattened CSV, JSON)
// role: report/rendering
// inputs: EnrichedContributor list in enrichment order
// outputs: Sorted list, FlatTable, summary text, export files
// side_effects: write_csv / write_json create files
// invariants:
// - Sort is stable, newest latest_commit_date first, contributors without a date last
// - Flattened social columns appear once per platform observed in any row, in first-seen order
// errors: IO and CSV errors bubble with the target path as context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::EnrichedContributor;
use crate::repo_ref::RepoRef;

const BASE_COLUMNS: [&str; 10] = [
  "username",
  "name",
  "email",
  "bio",
  "company",
  "location",
  "avatar_url",
  "profile_url",
  "contributions",
  "latest_commit_date",
];

/// ISO-8601 zulu timestamps order correctly as plain strings; `None` sorts below every date.
pub fn sort_by_latest_commit(mut contributors: Vec<EnrichedContributor>) -> Vec<EnrichedContributor> {
  contributors.sort_by(|a, b| b.latest_commit_date.cmp(&a.latest_commit_date));
  contributors
}

/// Row-oriented view with `social_links` spread over `social_<platform>` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
  pub columns: Vec<String>,
  /// Present cells only; a missing key is an empty cell.
  pub rows: Vec<BTreeMap<String, String>>,
}

impl FlatTable {
  pub fn cell<'a>(&'a self, row: usize, column: &str) -> Option<&'a str> {
    self.rows.get(row).and_then(|r| r.get(column)).map(|s| s.as_str())
  }
}

pub fn flatten(contributors: &[EnrichedContributor]) -> FlatTable {
  let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
  let mut rows = Vec::with_capacity(contributors.len());

  for c in contributors {
    let mut row: BTreeMap<String, String> = BTreeMap::new();

    for (key, value) in [
      ("username", c.username.clone()),
      ("name", c.name.clone()),
      ("email", c.email.clone()),
      ("bio", c.bio.clone()),
      ("company", c.company.clone()),
      ("location", c.location.clone()),
      ("avatar_url", c.avatar_url.clone()),
      ("profile_url", c.profile_url.clone()),
      ("contributions", c.contributions.to_string()),
    ] {
      row.insert(key.to_string(), value);
    }

    if let Some(date) = &c.latest_commit_date {
      row.insert("latest_commit_date".to_string(), date.clone());
    }

    for (platform, url) in &c.social_links {
      let column = platform.column_name();

      if !columns.contains(&column) {
        columns.push(column.clone());
      }
      row.insert(column, url.clone());
    }

    rows.push(row);
  }

  FlatTable { columns, rows }
}

pub fn write_csv(table: &FlatTable, path: &Path) -> Result<()> {
  let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

  wtr.write_record(&table.columns)?;

  for row in 0..table.rows.len() {
    let record: Vec<&str> = table.columns.iter().map(|col| table.cell(row, col).unwrap_or("")).collect();
    wtr.write_record(&record)?;
  }

  wtr.flush().with_context(|| format!("writing {}", path.display()))?;
  Ok(())
}

#[derive(Debug, Serialize)]
pub struct ContributorReport<'a> {
  pub repo: String,
  pub count: usize,
  pub contributors: &'a [EnrichedContributor],
}

pub fn write_json(repo: &RepoRef, contributors: &[EnrichedContributor], path: &Path) -> Result<()> {
  let report = ContributorReport {
    repo: repo.to_string(),
    count: contributors.len(),
    contributors,
  };

  std::fs::write(path, serde_json::to_vec_pretty(&report)?).with_context(|| format!("writing {}", path.display()))?;
  Ok(())
}

/// Console report, one block per contributor in the given order.
pub fn render_summary(contributors: &[EnrichedContributor]) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "All Contributors (sorted by most recent commit):");
  let _ = writeln!(out, "{}", "-".repeat(80));

  for (i, c) in contributors.iter().enumerate() {
    let _ = writeln!(out, "{}. {}", i + 1, c.display_name());
    let _ = writeln!(out, "   Username: {}", c.username);
    let _ = writeln!(out, "   Contributions: {}", c.contributions);
    let _ = writeln!(out, "   Latest commit: {}", c.latest_commit_date.as_deref().unwrap_or("none"));

    if !c.social_links.is_empty() {
      let _ = writeln!(out, "   Social links:");
      for (platform, url) in &c.social_links {
        let _ = writeln!(out, "     - {}: {}", platform, url);
      }
    }
    out.push('\n');
  }

  out
}
