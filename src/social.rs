// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive social-media links from free-text profile fields
// role: enrichment/heuristics
// inputs: UserProfile (blog, html_url, twitter_username)
// outputs: SocialLinks
// invariants:
// - Steps run in order blog -> html_url -> twitter_username; each only inserts or overwrites
// - html_url always wins for GitHub; twitter_username always wins for Twitter
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::model::{Platform, SocialLinks, UserProfile};

/// Domain substrings checked in order; the first hit decides the platform.
const DOMAIN_RULES: &[(&[&str], Platform)] = &[
  (&["twitter.com", "x.com"], Platform::Twitter),
  (&["linkedin.com"], Platform::LinkedIn),
  (&["facebook.com"], Platform::Facebook),
  (&["instagram.com"], Platform::Instagram),
  (&["github.com"], Platform::GitHub),
];

pub fn derive_social_links(profile: &UserProfile) -> SocialLinks {
  let mut links = SocialLinks::new();

  if profile.blog.starts_with("http") {
    links.insert(classify_url(&profile.blog), profile.blog.clone());
  }

  if !profile.html_url.is_empty() {
    links.insert(Platform::GitHub, profile.html_url.clone());
  }

  if !profile.twitter_username.is_empty() {
    links.insert(
      Platform::Twitter,
      format!("https://twitter.com/{}", profile.twitter_username),
    );
  }

  links
}

/// Substring match on the lower-cased host; unrecognized hosts are a personal website.
pub fn classify_url(url: &str) -> Platform {
  let domain = host_of(url).to_lowercase();

  DOMAIN_RULES
    .iter()
    .find(|(needles, _)| needles.iter().any(|n| domain.contains(n)))
    .map(|(_, platform)| *platform)
    .unwrap_or(Platform::Website)
}

fn host_of(url: &str) -> &str {
  let after_scheme = url.rsplit("//").next().unwrap_or(url);
  after_scheme.split('/').next().unwrap_or(after_scheme)
}
