use std::collections::HashMap;

use test_support::{FakeGithub, FakeResponse};

pub const RESET_FAR_AWAY: i64 = 4_102_444_800;

/// Fake API serving the fixture repository `acme/widgets`.
pub fn fixture_github() -> FakeGithub {
  let contributors = test_support::read_fixture_text("contributors_page1.json");
  let users: HashMap<String, serde_json::Value> = test_support::read_fixture_json("users.json");
  let commits: HashMap<String, serde_json::Value> = test_support::read_fixture_json("commits.json");

  FakeGithub::serve(move |target| {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let param = |key: &str| {
      query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
    };

    let resp = match path {
      "/repos/acme/widgets/contributors" if param("page").as_deref() == Some("1") => {
        FakeResponse::json(200, contributors.clone())
      }
      "/repos/acme/widgets/contributors" => FakeResponse::json(200, "[]"),
      "/repos/acme/widgets/commits" => match param("author").and_then(|a| commits.get(&a)) {
        Some(list) => FakeResponse::json(200, list.to_string()),
        None => FakeResponse::json(200, "[]"),
      },
      _ => match path.strip_prefix("/users/").and_then(|login| users.get(login)) {
        Some(user) => FakeResponse::json(200, user.to_string()),
        None => FakeResponse::json(404, r#"{"message":"Not Found"}"#),
      },
    };

    resp.rate_limit(4999, RESET_FAR_AWAY)
  })
}
