// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Rate-limit-aware GET client for the GitHub REST API
// role: github/http
// inputs: API base URL, optional bearer token, retry bound, Pacer (clock + sleep)
// outputs: Parsed JSON bodies, or an empty object when a call yields no data
// side_effects: Network calls; blocks the calling thread while waiting for quota reset
// invariants:
// - RateLimitState always reflects the most recent response headers (0 when a header is absent)
// - When remaining <= 1 the next request waits until reset + 5s
// - A 403 whose message mentions "rate limit" is retried after the reset wait, at most max_retries times
// errors: Logged via tracing and swallowed; callers see an empty object
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::cell::Cell;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::ext::serde_json::JsonFetch;
use crate::github::{empty_json, GithubApi};

pub const ACCEPT: &str = "application/vnd.github.v3+json";
pub const USER_AGENT: &str = concat!("contributor-report/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Seconds added to the advertised reset time before retrying.
const RESET_MARGIN_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitState {
  pub remaining: Option<i64>,
  pub reset_epoch: Option<i64>,
}

/// Clock and sleep used by the client; swapped out in tests.
pub trait Pacer {
  fn now_epoch(&self) -> i64;
  fn pause(&self, wait: Duration);
}

pub struct SystemPacer;

impl Pacer for SystemPacer {
  fn now_epoch(&self) -> i64 {
    chrono::Utc::now().timestamp()
  }

  fn pause(&self, wait: Duration) {
    std::thread::sleep(wait);
  }
}

enum Outcome {
  Data(serde_json::Value),
  RateLimited,
  NoData,
}

pub struct RateLimitedClient {
  base_url: String,
  token: Option<String>,
  max_retries: u32,
  agent: ureq::Agent,
  pacer: Box<dyn Pacer>,
  state: Cell<RateLimitState>,
}

impl RateLimitedClient {
  pub fn new(base_url: &str, token: Option<String>, max_retries: u32) -> Self {
    Self::with_pacer(base_url, token, max_retries, Box::new(SystemPacer))
  }

  pub fn with_pacer(base_url: &str, token: Option<String>, max_retries: u32, pacer: Box<dyn Pacer>) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      token,
      max_retries,
      agent: ureq::AgentBuilder::new().build(),
      pacer,
      state: Cell::new(RateLimitState::default()),
    }
  }

  pub fn rate_limit(&self) -> RateLimitState {
    self.state.get()
  }

  /// Seconds to wait until the quota resets, including the safety margin. May be negative.
  fn seconds_until_reset(&self) -> i64 {
    self.state.get().reset_epoch.unwrap_or(0) - self.pacer.now_epoch() + RESET_MARGIN_SECS
  }

  fn wait_for_reset(&self, reason: &str) {
    let secs = self.seconds_until_reset();

    if secs > 0 {
      info!(seconds = secs, "{}; waiting for quota reset", reason);
      self.pacer.pause(Duration::from_secs(secs as u64));
    }
  }

  fn wait_if_exhausted(&self) {
    if matches!(self.state.get().remaining, Some(n) if n <= 1) {
      self.wait_for_reset("Rate limit reached");
    }
  }

  fn observe(&self, resp: &ureq::Response) {
    let header_i64 = |name: &str| resp.header(name).and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0);

    self.state.set(RateLimitState {
      remaining: Some(header_i64("X-RateLimit-Remaining")),
      reset_epoch: Some(header_i64("X-RateLimit-Reset")),
    });
  }

  fn send(&self, url: &str, query: &[(&str, String)]) -> Outcome {
    let mut req = self.agent.get(url).set("Accept", ACCEPT).set("User-Agent", USER_AGENT);

    if let Some(token) = &self.token {
      req = req.set("Authorization", &format!("Bearer {}", token));
    }

    for (key, value) in query {
      req = req.query(key, value);
    }

    let resp = match req.call() {
      Ok(resp) => resp,
      Err(ureq::Error::Status(_, resp)) => resp,
      Err(ureq::Error::Transport(err)) => {
        warn!(url, error = %err, "GitHub API request failed");
        return Outcome::NoData;
      }
    };

    self.observe(&resp);
    let status = resp.status();

    if status == 200 {
      return match resp.into_json::<serde_json::Value>() {
        Ok(v) => Outcome::Data(v),
        Err(err) => {
          warn!(url, error = %err, "GitHub API returned an unreadable body");
          Outcome::NoData
        }
      };
    }

    let body = resp.into_string().unwrap_or_default();

    if status == 403 && is_rate_limit_message(&body) {
      return Outcome::RateLimited;
    }

    warn!(url, status, body = %body.trim(), "GitHub API error");
    Outcome::NoData
  }
}

impl GithubApi for RateLimitedClient {
  fn get_json(&self, path: &str, query: &[(&str, String)]) -> serde_json::Value {
    let url = format!("{}{}", self.base_url, path);
    let mut retries = 0u32;

    loop {
      self.wait_if_exhausted();
      debug!(url = %url, ?query, "GET");

      match self.send(&url, query) {
        Outcome::Data(v) => return v,
        Outcome::NoData => return empty_json(),
        Outcome::RateLimited if retries >= self.max_retries => {
          warn!(url = %url, retries, "Rate limit still exceeded after retries; giving up on this call");
          return empty_json();
        }
        Outcome::RateLimited => {
          retries += 1;
          self.wait_for_reset("Rate limit exceeded");
        }
      }
    }
  }
}

/// 403 bodies are treated as rate limiting only when their message says so.
fn is_rate_limit_message(body: &str) -> bool {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|v| v.fetch("message").to::<String>())
    .map(|m| m.to_lowercase().contains("rate limit"))
    .unwrap_or(false)
}
