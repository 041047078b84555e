use predicates::prelude::*;

use crate::common::fixture_github;

#[test]
fn report_is_sorted_printed_and_exported() {
  test_support::init_tracing();
  let server = fixture_github();
  let td = test_support::tempdir();
  let json_path = td.path().join("report.json");

  let assert = test_support::cmd_bin("contributor-report")
    .current_dir(td.path())
    .env("RUST_LOG", "info")
    .args([
      "https://github.com/acme/widgets/tree/main/src",
      "--token",
      "test-token",
      "--api-base",
      &server.base_url,
      "--out-dir",
      td.path().to_str().unwrap(),
      "--json",
      json_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stderr(predicate::str::contains("Processing contributor 3/3: octocat"));

  // Console summary: newest commit first, no-commit contributors last
  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
  let mona = stdout.find("1. Mona Lisa").expect("monalisa ranked first");
  let octo = stdout.find("2. The Octocat").expect("octocat ranked second");
  let hubot = stdout.find("3. hubot").expect("hubot falls back to login");
  assert!(mona < octo && octo < hubot);
  assert!(stdout.contains("   Latest commit: 2024-06-01T12:00:00Z"));
  assert!(stdout.contains("   Latest commit: none"));
  assert!(stdout.contains("     - Twitter: https://twitter.com/github"));
  assert!(stdout.contains("     - Website: https://github.blog"));

  // CSV export
  let csv = std::fs::read_to_string(td.path().join("acme_widgets_contributors.csv")).unwrap();
  let lines: Vec<&str> = csv.lines().collect();
  assert_eq!(
    lines[0],
    "username,name,email,bio,company,location,avatar_url,profile_url,contributions,latest_commit_date,\
     social_linkedin,social_github,social_twitter,social_website"
  );
  assert_eq!(lines.len(), 4);
  assert!(lines[1].starts_with("monalisa,Mona Lisa,mona@example.com,"));
  assert!(lines[1].ends_with(",45,2024-06-01T12:00:00Z,https://www.linkedin.com/in/monalisa,https://github.com/monalisa,,"));
  assert_eq!(
    lines[3],
    "hubot,,,,,,https://avatars.example/u/1,https://github.com/hubot,120,,,https://github.com/hubot,,"
  );

  // JSON export
  let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
  assert_eq!(v["repo"], "acme/widgets");
  assert_eq!(v["count"], 3);
  assert_eq!(v["contributors"][1]["username"], "octocat");
  assert_eq!(v["contributors"][1]["social_links"]["GitHub"], "https://github.com/octocat");

  // Requests: one contributors page, then profile + commits per contributor in list order
  let targets = server.targets();
  assert_eq!(targets.len(), 7);
  assert_eq!(targets[0], "/repos/acme/widgets/contributors?per_page=100&page=1");
  assert_eq!(targets[1], "/users/hubot");
  assert_eq!(targets[2], "/repos/acme/widgets/commits?author=hubot&per_page=10");
  assert_eq!(targets[5], "/users/octocat");
  for head in server.requests() {
    let head = head.to_lowercase();
    assert!(head.contains("authorization: bearer test-token"));
    assert!(head.contains("accept: application/vnd.github.v3+json"));
  }
}
