// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Dotted-path lookups into GitHub API payloads with typed, panic-free extraction
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper (to, to_or_default, text)
// invariants: No panics; missing paths and type mismatches yield None; null and "" read as absent text
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

/// A location inside a JSON document, resolved by [`JsonFetch::fetch`].
pub struct JsonFetched<'a> {
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// Attempt to deserialize the fetched value as `T`.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  /// Deserialize as `T`, returning `T::default()` on failure.
  pub fn to_or_default<T>(&self) -> T
  where
    T: DeserializeOwned + Default,
  {
    self.to::<T>().unwrap_or_default()
  }

  /// Borrow a non-empty string value. Profile fields use `null` and `""` interchangeably.
  pub fn text(&self) -> Option<&'a str> {
    self.inner.and_then(|v| v.as_str()).filter(|s| !s.is_empty())
  }
}

/// Fetch nested values via dotted paths like `"commit.author.date"`.
///
/// Numeric segments index into arrays, so `"0.commit.author.date"` reads the first commit.
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      let next = match cur {
        serde_json::Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => cur.get(key),
      };

      match next {
        Some(v) => cur = v,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }
}
