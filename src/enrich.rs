// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Enrich each contributor with profile details, latest commit date and social links
// role: enrichment/orchestration
// inputs: GithubApi, RepoRef, Contributor list (API order)
// outputs: EnrichedContributor per contributor, same order as input
// side_effects: Two API calls per contributor (profile, recent commits), strictly sequential
// invariants:
// - Only the first commit of the newest-first commit list is consulted
// - Missing or malformed data degrades to empty strings / None, never to an error
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::info;

use crate::ext::serde_json::JsonFetch;
use crate::github::GithubApi;
use crate::model::{Contributor, EnrichedContributor, UserProfile};
use crate::repo_ref::RepoRef;
use crate::social::derive_social_links;

pub const RECENT_COMMITS: usize = 10;

pub fn fetch_profile(api: &dyn GithubApi, login: &str) -> UserProfile {
  let v = api.get_json(&format!("/users/{}", login), &[]);
  UserProfile::from_json(&v)
}

/// Recent commits authored by `login` in the repository, newest first per the API contract.
pub fn fetch_recent_commits(api: &dyn GithubApi, repo: &RepoRef, login: &str) -> serde_json::Value {
  let path = format!("/repos/{}/{}/commits", repo.owner, repo.name);
  let query = [("author", login.to_string()), ("per_page", RECENT_COMMITS.to_string())];
  api.get_json(&path, &query)
}

/// Author date of the first commit, when the payload is a list and the date is RFC 3339.
pub fn latest_commit_date(commits: &serde_json::Value) -> Option<String> {
  let first = commits.as_array()?.first()?;
  let date = first.fetch("commit.author.date").text()?;

  chrono::DateTime::parse_from_rfc3339(date).ok()?;
  Some(date.to_string())
}

pub fn enrich(api: &dyn GithubApi, repo: &RepoRef, contributor: Contributor) -> EnrichedContributor {
  let profile = fetch_profile(api, &contributor.login);
  let commits = fetch_recent_commits(api, repo, &contributor.login);

  let latest = latest_commit_date(&commits);
  let social_links = derive_social_links(&profile);

  EnrichedContributor::new(contributor, profile, latest, social_links)
}

pub fn enrich_all(api: &dyn GithubApi, repo: &RepoRef, contributors: Vec<Contributor>) -> Vec<EnrichedContributor> {
  let total = contributors.len();
  let mut out = Vec::with_capacity(total);

  for (i, contributor) in contributors.into_iter().enumerate() {
    info!("Processing contributor {}/{}: {}", i + 1, total, contributor.login);
    out.push(enrich(api, repo, contributor));
  }

  out
}
