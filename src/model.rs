// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Contributor, profile and report types shared by fetching, enrichment and export
// role: model/types
// outputs: Serializable structs; EnrichedContributor is the unit of export
// invariants:
// - Profile text fields are never null; absent values are empty strings
// - latest_commit_date is the only nullable field of an EnrichedContributor
// - SocialLinks holds at most one URL per Platform
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ext::serde_json::JsonFetch;

/// One entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
  pub login: String,
  pub avatar_url: String,
  pub contributions: i64,
}

impl Contributor {
  /// Returns `None` for entries without a login (anonymous contributors).
  pub fn from_json(v: &serde_json::Value) -> Option<Self> {
    let login = v.fetch("login").text()?.to_string();

    Some(Self {
      login,
      avatar_url: v.fetch("avatar_url").to_or_default::<String>(),
      contributions: v.fetch("contributions").to_or_default::<i64>(),
    })
  }
}

/// The subset of `GET /users/{login}` the report uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
  pub login: String,
  pub name: String,
  pub email: String,
  pub bio: String,
  pub company: String,
  pub location: String,
  pub html_url: String,
  pub blog: String,
  pub twitter_username: String,
}

impl UserProfile {
  /// Missing, null or non-string fields become empty strings; an error payload yields an empty profile.
  pub fn from_json(v: &serde_json::Value) -> Self {
    let text = |key: &str| v.fetch(key).text().unwrap_or_default().to_string();

    Self {
      login: text("login"),
      name: text("name"),
      email: text("email"),
      bio: text("bio"),
      company: text("company"),
      location: text("location"),
      html_url: text("html_url"),
      blog: text("blog"),
      twitter_username: text("twitter_username"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
  Twitter,
  LinkedIn,
  Facebook,
  Instagram,
  GitHub,
  Website,
}

impl Platform {
  pub fn as_str(self) -> &'static str {
    match self {
      Platform::Twitter => "Twitter",
      Platform::LinkedIn => "LinkedIn",
      Platform::Facebook => "Facebook",
      Platform::Instagram => "Instagram",
      Platform::GitHub => "GitHub",
      Platform::Website => "Website",
    }
  }

  /// Flattened export column, e.g. `social_linkedin`.
  pub fn column_name(self) -> String {
    format!("social_{}", self.as_str().to_lowercase())
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

pub type SocialLinks = BTreeMap<Platform, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedContributor {
  pub username: String,
  pub name: String,
  pub email: String,
  pub bio: String,
  pub company: String,
  pub location: String,
  pub avatar_url: String,
  pub profile_url: String,
  pub contributions: i64,
  pub latest_commit_date: Option<String>,
  pub social_links: SocialLinks,
}

impl EnrichedContributor {
  pub fn new(
    contributor: Contributor,
    profile: UserProfile,
    latest_commit_date: Option<String>,
    social_links: SocialLinks,
  ) -> Self {
    Self {
      username: contributor.login,
      name: profile.name,
      email: profile.email,
      bio: profile.bio,
      company: profile.company,
      location: profile.location,
      avatar_url: contributor.avatar_url,
      profile_url: profile.html_url,
      contributions: contributor.contributions,
      latest_commit_date,
      social_links,
    }
  }

  /// Profile name, falling back to the login.
  pub fn display_name(&self) -> &str {
    if self.name.is_empty() {
      &self.username
    } else {
      &self.name
    }
  }
}
