use tracing::{debug, info};

use crate::github::GithubApi;
use crate::model::Contributor;
use crate::repo_ref::RepoRef;

pub const PAGE_SIZE: usize = 100;

/// Page through `/repos/{owner}/{name}/contributors` until a short, empty or non-list page.
pub fn list_contributors(api: &dyn GithubApi, repo: &RepoRef) -> Vec<Contributor> {
  let path = format!("/repos/{}/{}/contributors", repo.owner, repo.name);
  let mut out: Vec<Contributor> = Vec::new();
  let mut page = 1usize;

  loop {
    let query = [("per_page", PAGE_SIZE.to_string()), ("page", page.to_string())];
    let body = api.get_json(&path, &query);

    let Some(items) = body.as_array().filter(|a| !a.is_empty()) else {
      break;
    };

    for item in items {
      match Contributor::from_json(item) {
        Some(c) => out.push(c),
        None => debug!(page, "skipping contributor entry without a login"),
      }
    }

    if items.len() < PAGE_SIZE {
      break;
    }
    page += 1;
  }

  info!(repo = %repo, count = out.len(), "Found contributors");
  out
}
