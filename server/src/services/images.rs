//! Remote image allow-list.
//!
//! Car listings reference images by URL. Only `https` URLs on an
//! allow-listed host are accepted when an administrator adds a car.

/// Hosts accepted when `IMAGE_HOSTS` is not set.
pub const DEFAULT_IMAGE_HOSTS: [&str; 3] =
    ["images.unsplash.com", "firebasestorage.googleapis.com", "lh3.googleusercontent.com"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    hosts: Vec<String>,
}

impl ImagePolicy {
    #[must_use]
    pub fn new(hosts: Vec<String>) -> Self {
        Self { hosts: hosts.into_iter().map(|h| h.to_ascii_lowercase()).collect() }
    }

    /// Whether `url` is an `https` URL whose host exactly matches an allowed host.
    #[must_use]
    pub fn allows(&self, url: &str) -> bool {
        let Ok(parsed) = reqwest::Url::parse(url.trim()) else {
            return false;
        };
        if parsed.scheme() != "https" {
            return false;
        }
        parsed
            .host_str()
            .is_some_and(|host| self.hosts.iter().any(|allowed| allowed.eq_ignore_ascii_case(host)))
    }

    /// First URL the policy rejects, if any.
    #[must_use]
    pub fn first_rejected<'a>(&self, urls: &'a [String]) -> Option<&'a str> {
        urls.iter().map(String::as_str).find(|url| !self.allows(url))
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOSTS.iter().map(|h| (*h).to_owned()).collect())
    }
}

#[cfg(test)]
#[path = "images_test.rs"]
mod tests;
