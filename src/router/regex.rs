use crate::Error;
use regex::Regex;
use std::fmt;

/// A compiled route pattern.
#[derive(Clone)]
pub struct Pattern {
  regex: Regex,
}

impl Pattern {
  pub fn new(pattern: &str) -> Result<Self, Error> {
    Regex::new(pattern)
      .map(|regex| Self { regex })
      .map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
      })
  }

  pub fn as_str(&self) -> &str {
    self.regex.as_str()
  }

  /// Matches `target` and returns one `(key, value)` pair per group, in
  /// group order, starting with the whole match.
  ///
  /// Keys are the group name prefixed with `:`, so every unnamed group
  /// (including the whole match) is keyed `:`. Groups that did not
  /// participate in the match capture the empty string.
  pub fn submatches(&self, target: &str) -> Option<Vec<(String, String)>> {
    let captures = self.regex.captures(target)?;

    let params = self
      .regex
      .capture_names()
      .zip(captures.iter())
      .map(|(name, capture)| {
        (
          format!(":{}", name.unwrap_or("")),
          capture.map_or_else(String::new, |m| m.as_str().to_string()),
        )
      })
      .collect();

    Some(params)
  }
}

impl fmt::Debug for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Pattern").field(&self.as_str()).finish()
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
