use regex::Regex;

/// Fallback for lazily compiled patterns that failed to build: a regex that
/// never matches anything, so callers degrade to a no-op instead of
/// panicking.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(clippy::unwrap_used, reason = "Pattern is a valid literal")]
    Regex::new(r"^\b$").unwrap()
  })
}

/// Compile `pattern`, logging and falling back to [`never_matching_regex`]
/// on failure.
pub(crate) fn compile_or_never(name: &str, pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    log::error!(
      "Failed to compile {name} regex: {e}\n Falling back to never matching \
       regex."
    );
    never_matching_regex()
  })
}
