use predicates::prelude::*;
use test_support::{FakeGithub, FakeResponse};

#[test]
fn single_segment_reference_aborts_before_any_request() {
  let server = FakeGithub::serve(|_| FakeResponse::json(200, "[]"));
  let td = test_support::tempdir();

  test_support::cmd_bin("contributor-report")
    .current_dir(td.path())
    .args(["acme", "--token", "t", "--api-base", &server.base_url])
    .assert()
    .failure()
    .stderr(predicate::str::contains("could not extract owner and repo name from `acme`"));

  assert!(server.requests().is_empty());
  assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 0);
}

#[test]
fn missing_reference_is_reported() {
  let td = test_support::tempdir();

  test_support::cmd_bin("contributor-report")
    .current_dir(td.path())
    .env_remove("GITHUB_REPOSITORY")
    .args(["--token", "t"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("GITHUB_REPOSITORY"));
}
