//! Shared-chrome visibility policy.
//!
//! DESIGN
//! ======
//! Authentication, account and admin screens render without the site header
//! and footer. The decision is a plain prefix test on the current pathname and
//! is re-evaluated by the `Layout` component on every navigation.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Path prefixes rendered without header and footer.
pub const BARE_PREFIXES: &[&str] = &["/login", "/register", "/admin", "/account"];

/// Whether `path` starts with any of `prefixes`.
///
/// Matching is a raw string prefix test, so `/loginx` is bare as well.
#[must_use]
pub fn is_bare_path(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Whether `path` should be wrapped between the shared header and footer.
#[must_use]
pub fn shows_chrome(path: &str) -> bool {
    !is_bare_path(path, BARE_PREFIXES)
}
